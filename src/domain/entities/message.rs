use super::User;

/// A chat message delivered by the platform gateway
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: String,
    pub author: User,
    pub channel_id: String,
    /// `None` for direct messages
    pub guild_id: Option<String>,
    pub content: String,
}

impl IncomingMessage {
    pub fn new(author: User, channel_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            author,
            channel_id: channel_id.into(),
            guild_id: None,
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn in_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }
}
