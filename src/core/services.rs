pub mod account;
pub mod join_request;
pub mod organization;
pub mod project;
pub mod volunteer;
