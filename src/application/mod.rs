//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Authentication workflow
//! - Errors: Domain-specific errors
//! - Messaging: Command routing and dispatching

pub mod errors;
pub mod services;
pub mod messaging;
