use actix_web::web::{self, get, post, put, resource, scope, JsonConfig, QueryConfig, ServiceConfig};
use actix_web::Route;

use crate::core::ports::repository::Manager;
use crate::error::Error;
use crate::middlewares::jwt::JWTMiddleware;

/// Builds the routing table against the in-memory store and initialises it.
#[cfg(test)]
macro_rules! test_app {
    ($manager:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($manager.clone()))
                .configure(crate::handlers::routes::<crate::database::memory::MemoryManager>(crate::handlers::test::SECRET.to_vec())),
        )
        .await
    };
}

/// Status of a request, including ones the session middleware turns away before any handler runs.
#[cfg(test)]
macro_rules! status_of {
    ($app:expr, $req:expr) => {
        match actix_web::test::try_call_service(&$app, $req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        }
    };
}

pub mod account;
pub mod join_request;
pub mod organization;
pub mod project;
pub mod volunteer;

fn not_allowed(method: &'static str, action: &'static str) -> Route {
    web::route().to(move || async move { Err::<actix_web::HttpResponse, Error>(Error::MethodNotAllowed(format!("Method not allowed. Use {} to {}.", method, action))) })
}

/// Every route lives under `/api`. Routes that need a session wrap the JWT middleware per resource.
pub fn routes<M: Manager + 'static>(secret: Vec<u8>) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        let session = || JWTMiddleware::new(secret.clone());
        cfg.service(
            scope("/api")
                .app_data(JsonConfig::default().error_handler(|err, _| Error::BusinessError(format!("Invalid request body: {}", err)).into()))
                .app_data(QueryConfig::default().error_handler(|err, _| Error::BusinessError(format!("Invalid query parameters: {}", err)).into()))
                .service(
                    resource("/create-account")
                        .wrap(session())
                        .route(post().to(account::create::<M>))
                        .default_service(not_allowed("POST", "create an account")),
                )
                .service(
                    resource("/account")
                        .wrap(session())
                        .route(get().to(account::current::<M>))
                        .default_service(not_allowed("GET", "fetch the current account")),
                )
                .service(
                    resource("/update-organization")
                        .wrap(session())
                        .route(post().to(organization::update::<M>))
                        .default_service(not_allowed("POST", "update organization details")),
                )
                .service(
                    resource("/organization/get-all")
                        .route(get().to(organization::list::<M>))
                        .default_service(not_allowed("GET", "fetch organizations")),
                )
                .service(
                    resource("/organization/volunteers/get-all")
                        .wrap(session())
                        .route(get().to(organization::members::<M>))
                        .default_service(not_allowed("GET", "fetch volunteers")),
                )
                .service(
                    resource("/organization/join-request/get-all")
                        .wrap(session())
                        .route(get().to(join_request::list::<M>))
                        .default_service(not_allowed("GET", "fetch join requests")),
                )
                .service(
                    resource("/organization/join-request/accept")
                        .wrap(session())
                        .route(post().to(join_request::accept::<M>))
                        .default_service(not_allowed("POST", "accept join requests")),
                )
                .service(
                    resource("/organization/join-request/reject")
                        .wrap(session())
                        .route(post().to(join_request::reject::<M>))
                        .default_service(not_allowed("POST", "reject join requests")),
                )
                .service(
                    resource("/volunteer/update-volunteer-profile")
                        .wrap(session())
                        .route(put().to(volunteer::update_profile::<M>))
                        .default_service(not_allowed("PUT", "update volunteer profile")),
                )
                .service(
                    resource("/volunteer/get-joined-orgs")
                        .wrap(session())
                        .route(get().to(volunteer::joined::<M>))
                        .default_service(not_allowed("GET", "fetch joined organizations")),
                )
                .service(
                    resource("/volunteer/join-request/send")
                        .wrap(session())
                        .route(post().to(join_request::send::<M>))
                        .default_service(not_allowed("POST", "send join requests")),
                )
                .service(
                    resource("/projects/create")
                        .wrap(session())
                        .route(post().to(project::create::<M>))
                        .default_service(not_allowed("POST", "create projects")),
                )
                .service(
                    resource("/projects/get-all")
                        .route(get().to(project::list::<M>))
                        .default_service(not_allowed("GET", "fetch projects")),
                ),
        );
    }
}
