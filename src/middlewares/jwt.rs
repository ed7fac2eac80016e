use serde::{Deserialize, Serialize};

use actix_web::{
    dev::{Service, ServiceRequest, Transform},
    http::header::AUTHORIZATION,
    HttpMessage,
};

use crate::context::UserInfo;
use crate::core::ports::tokener::{Payload, Tokener};
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use std::future::Future;
use std::pin::Pin;

/// Identity-provider session carried in the bearer token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionClaim {
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub exp: i64,
}

impl Payload for SessionClaim {
    fn email(&self) -> &str {
        &self.email
    }
}

impl From<SessionClaim> for UserInfo {
    fn from(claim: SessionClaim) -> Self {
        UserInfo {
            email: claim.email,
            name: claim.name,
            image: claim.image,
            provider_account_id: claim.sub,
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Result<&str, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("Not authenticated".into()))?;
    let value = header
        .to_str()
        .map_err(|_| Error::Unauthorized("Malformed authorization header".into()))?;
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::Unauthorized("Malformed authorization header".into()))
}

pub(crate) struct JWTMiddleware {
    secret: Vec<u8>,
}

impl JWTMiddleware {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }
}

impl<S> Transform<S, ServiceRequest> for JWTMiddleware
where
    S: Service<ServiceRequest> + 'static,
    S::Future: 'static,
    S::Error: Into<actix_web::Error>,
{
    type Error = actix_web::Error;
    type Response = S::Response;
    type Transform = JWTService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;
    fn new_transform(&self, service: S) -> Self::Future {
        let secret = self.secret.clone();
        Box::pin(async move {
            Ok(JWTService {
                tokener: JWT::new(secret),
                next_service: service,
            })
        })
    }
}

pub struct JWTService<S> {
    tokener: JWT,
    next_service: S,
}

impl<S> Service<ServiceRequest> for JWTService<S>
where
    S: Service<ServiceRequest>,
    S::Future: 'static,
    S::Error: Into<actix_web::Error>,
{
    type Response = S::Response;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    fn poll_ready(&self, ctx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.next_service.poll_ready(ctx).map_err(|e| e.into())
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let claim = bearer_token(&req).and_then(|token| <JWT as Tokener<SessionClaim>>::verify_token(&self.tokener, token));
        match claim {
            Err(e) => {
                log::debug!("rejected session for {}: {}", req.path(), e);
                return Box::pin(async move { Err(e.into()) });
            }
            Ok(claim) => {
                req.extensions_mut().insert(UserInfo::from(claim));
            }
        }

        let res_fut = self.next_service.call(req);
        Box::pin(async move {
            let resp = res_fut.await.map_err(|e| e.into())?;
            Ok(resp)
        })
    }
}
