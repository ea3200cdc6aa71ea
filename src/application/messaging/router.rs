//! Command router - Decides whether a message invokes the configured command

use std::sync::Arc;
use crate::domain::entities::{IncomingMessage, ParsedCommand};
use crate::infrastructure::config::BotConfig;

/// Matches raw messages against the configured prefix and command name
pub struct CommandRouter {
    config: Arc<BotConfig>,
}

impl CommandRouter {
    pub fn new(config: Arc<BotConfig>) -> Self {
        Self { config }
    }

    /// Route a message. `self_id` is the bot's own user id; messages it
    /// authored never match.
    pub fn route(&self, message: &IncomingMessage, self_id: &str) -> ParsedCommand {
        if message.author.id == self_id {
            return ParsedCommand::unmatched();
        }

        let content = message.content.as_str();
        if content.chars().count() <= 1 || !content.starts_with(&self.config.prefix) {
            return ParsedCommand::unmatched();
        }

        let mut tokens = content.split_whitespace();
        let Some(first) = tokens.next() else {
            return ParsedCommand::unmatched();
        };

        let name = first
            .strip_prefix(self.config.prefix.as_str())
            .unwrap_or(first)
            .to_lowercase();
        if name != self.config.command.to_lowercase() {
            return ParsedCommand::unmatched();
        }

        ParsedCommand::matched(tokens.map(str::to_string).collect())
    }
}
