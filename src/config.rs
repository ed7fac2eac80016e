use std::str::FromStr;

use anyhow::{anyhow, Context};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub app_env: String,
}

impl Config {
    /// Reads the process environment, `.env` included.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |name: &str| lookup(name).filter(|v| !v.is_empty()).ok_or_else(|| anyhow!("environment variable {} is not set", name));
        let or_default = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_owned());
        Ok(Config {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: or_default("BIND_ADDRESS", "0.0.0.0"),
            port: parse(&lookup, "PORT", 8000)?,
            database_max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            app_env: or_default("APP_ENV", "development"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("environment variable {} is not a valid number: {:?}", name, raw)),
    }
}
