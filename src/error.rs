use std::sync::OnceLock;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error as ThisError;

static EXPOSE_INTERNAL_ERRORS: OnceLock<bool> = OnceLock::new();

/// Lets 500 responses carry the underlying error text. Only the first call has an effect.
pub fn expose_internal_errors(expose: bool) {
    let _ = EXPOSE_INTERNAL_ERRORS.set(expose);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    BusinessError(String),

    #[error("Validation error")]
    Validation(Vec<FieldError>),

    #[error("{field} already exists")]
    Duplicate { field: String },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("jwt error: {0}")]
    JWTError(#[from] jsonwebtoken::errors::Error),

    #[error("server error: {0}")]
    ServerError(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Error {
    fn client_message(&self) -> String {
        match self {
            Error::DatabaseError(_) | Error::ServerError(_) => "Internal server error".into(),
            Error::JWTError(_) => "Invalid session token".into(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BusinessError(_) | Error::Validation(_) | Error::Duplicate { .. } => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) | Error::JWTError(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::DatabaseError(_) | Error::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{} {}", status.as_u16(), self);
        }
        let errors = match self {
            Error::Validation(errors) => errors.clone(),
            Error::Duplicate { field } => vec![FieldError::new(field, self.to_string())],
            _ => Vec::new(),
        };
        let error = (status.is_server_error() && *EXPOSE_INTERNAL_ERRORS.get().unwrap_or(&false)).then(|| self.to_string());
        HttpResponse::build(status).json(ErrorBody {
            success: false,
            message: self.client_message(),
            errors,
            error,
        })
    }
}
