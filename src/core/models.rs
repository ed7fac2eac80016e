pub mod account;
pub mod common;
pub mod join_request;
pub mod organization;
pub mod project;
pub mod volunteer;
