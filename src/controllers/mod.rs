pub mod admin;
pub mod health;
pub mod nutrition;
pub mod premium;
pub mod report;
pub mod tracking;
pub mod user;
