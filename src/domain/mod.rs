//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (User, IncomingMessage, ParsedCommand, GuildInfo)
//! - Traits: Abstractions for infrastructure (ChatPlatformClient)

pub mod entities;
pub mod traits;
