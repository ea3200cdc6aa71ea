//! Application services - Business logic orchestration

pub mod auth_service;
pub mod bot_service;

pub use auth_service::{display_name, AuthenticationHandler};
pub use bot_service::serve;
