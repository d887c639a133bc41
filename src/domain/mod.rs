pub mod admin;
pub mod auth;
pub mod entitlement;
pub mod nutrition;
pub mod report;
pub mod tracking;
pub mod user;
