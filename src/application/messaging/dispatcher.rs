//! Message dispatcher - Routes messages to the authentication handler

use std::sync::Arc;
use crate::application::services::AuthenticationHandler;
use crate::domain::entities::{AuthenticationResult, IncomingMessage};
use crate::domain::traits::ChatPlatformClient;
use crate::infrastructure::config::BotConfig;
use super::router::CommandRouter;

/// Message dispatcher - holds only read-only state and may be shared
/// across concurrently handled events
pub struct MessageDispatcher {
    router: CommandRouter,
    handler: AuthenticationHandler,
    self_id: String,
}

impl MessageDispatcher {
    pub fn new(config: Arc<BotConfig>, client: Arc<dyn ChatPlatformClient>, self_id: impl Into<String>) -> Self {
        Self {
            router: CommandRouter::new(config.clone()),
            handler: AuthenticationHandler::new(config, client),
            self_id: self_id.into(),
        }
    }

    /// Process one inbound message. Returns `None` when the message was not
    /// a command for this bot.
    pub async fn dispatch(&self, message: IncomingMessage) -> Option<AuthenticationResult> {
        let parsed = self.router.route(&message, &self.self_id);
        if !parsed.matched {
            return None;
        }

        tracing::debug!(
            "Command in message {} from {} with args: {:?}",
            message.id,
            message.author.username,
            parsed.arguments
        );
        Some(
            self.handler
                .authenticate(message.guild_id.as_deref(), &message, &parsed.arguments)
                .await,
        )
    }
}
