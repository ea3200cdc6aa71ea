//! Domain traits - Abstractions for infrastructure implementations

pub mod platform;

pub use platform::{BotInfo, ChatPlatformClient};
