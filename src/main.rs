#![allow(async_fn_in_trait)]

mod config;
mod context;
mod core;
mod database;
mod error;
mod handlers;
mod impls;
mod middlewares;
mod request;
mod response;

use actix_web::web::Data;
use actix_web::HttpServer;
use sqlx::postgres::PgPoolOptions;

use config::Config;
use database::postgres::PgSqlxManager;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    error::expose_internal_errors(config.is_development());

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    log::info!("database ready, listening on {}:{} ({})", config.bind_address, config.port, config.app_env);

    let secret = config.jwt_secret.clone().into_bytes();
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(Data::new(PgSqlxManager::new(pool.clone())))
            .configure(handlers::routes::<PgSqlxManager>(secret.clone()))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
