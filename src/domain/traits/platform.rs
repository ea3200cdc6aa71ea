use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::errors::PlatformError;
use crate::domain::entities::{Embed, GuildInfo, IncomingMessage};

/// ChatPlatformClient trait - abstraction for the chat platform session
///
/// Gateway lifecycle and REST calls live behind this seam so that command
/// handling can run against an in-memory implementation.
#[async_trait]
pub trait ChatPlatformClient: Send + Sync {
    /// Open the gateway connection and start forwarding messages to `events`.
    /// Returns the bot's own identity.
    async fn connect(&self, events: mpsc::Sender<IncomingMessage>) -> Result<BotInfo, PlatformError>;

    /// Close the gateway connection
    async fn close(&self);

    /// Set the "playing" status shown next to the bot
    async fn set_presence(&self, status: &str) -> Result<(), PlatformError>;

    /// Change a member's guild nickname
    async fn rename_member(&self, guild_id: &str, user_id: &str, name: &str) -> Result<(), PlatformError>;

    /// Fetch a guild together with its roles
    async fn get_guild(&self, guild_id: &str) -> Result<GuildInfo, PlatformError>;

    /// Attach a role to a guild member
    async fn add_member_role(&self, guild_id: &str, user_id: &str, role_id: &str) -> Result<(), PlatformError>;

    /// Send a structured message to a channel
    async fn send_message(&self, channel_id: &str, embed: &Embed) -> Result<(), PlatformError>;
}

/// Bot information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
}
