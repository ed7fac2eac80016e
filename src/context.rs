use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::core::services::account::Identity;
use crate::error::Error;

/// Session identity placed in request extensions by the JWT middleware.
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub provider_account_id: String,
}

impl UserInfo {
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            provider_account_id: Some(self.provider_account_id.clone()),
        }
    }
}

impl FromRequest for UserInfo {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<Self>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(Error::Unauthorized("Not authenticated".into()))),
        }
    }
}
