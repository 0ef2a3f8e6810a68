pub mod auth;
pub mod health;
pub mod notification;
pub mod task;
pub mod user;
pub mod v1;
