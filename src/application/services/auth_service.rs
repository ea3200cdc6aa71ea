//! Authentication service - Renames a member and grants the configured role

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::{AuthenticationResult, IncomingMessage};
use crate::domain::traits::ChatPlatformClient;
use crate::infrastructure::config::BotConfig;

/// Renames the invoking member and grants them the configured role
pub struct AuthenticationHandler {
    config: Arc<BotConfig>,
    client: Arc<dyn ChatPlatformClient>,
}

impl AuthenticationHandler {
    pub fn new(config: Arc<BotConfig>, client: Arc<dyn ChatPlatformClient>) -> Self {
        Self { config, client }
    }

    /// Run the authentication flow for `message` and reply in its channel.
    ///
    /// Exactly one reply is sent unless the guild is missing or cannot be
    /// fetched, in which case the attempt is logged and abandoned without a reply.
    pub async fn authenticate(&self, guild_id: Option<&str>, message: &IncomingMessage, arguments: &[String]) -> AuthenticationResult {
        match self.try_authenticate(guild_id, message, arguments).await {
            Ok(result) => {
                let embed = result.to_embed();
                if let Err(e) = self.client.send_message(&message.channel_id, &embed).await {
                    tracing::warn!("Failed to send reply to channel {}: {}", message.channel_id, e);
                }
                result
            }
            Err(BotError::NotInGuild) => {
                tracing::debug!("Ignoring command from {} outside a guild", message.author.username);
                AuthenticationResult::failure(BotError::NotInGuild.to_string())
            }
            Err(e) => {
                tracing::error!("Authentication of {} aborted: {}", message.author.username, e);
                AuthenticationResult::failure(e.to_string())
            }
        }
    }

    async fn try_authenticate(&self, guild_id: Option<&str>, message: &IncomingMessage, arguments: &[String]) -> Result<AuthenticationResult, BotError> {
        // arguments[0] is the server name; required but not used yet
        if arguments.len() < 3 {
            return Ok(AuthenticationResult::failure(format!(
                "Missing argument. Please use {}{} servername firstname lastname",
                self.config.prefix, self.config.command
            )));
        }

        let guild_id = guild_id.ok_or(BotError::NotInGuild)?;
        let author = &message.author;
        let name = display_name(&arguments[1], &arguments[2]);

        if let Err(e) = self.client.rename_member(guild_id, &author.id, &name).await {
            tracing::warn!("Failed to change nickname for {}: {}", author.username, e);
        }

        let guild = self.client.get_guild(guild_id).await?;
        let role_id = guild.role_id_by_name(&self.config.role);

        if let Err(e) = self.client.add_member_role(guild_id, &author.id, role_id).await {
            let reason = format!("Failed to add role {} to {}", self.config.role, author.username);
            tracing::warn!("{}: {}", reason, e);
            return Ok(AuthenticationResult::failure(reason));
        }

        tracing::info!("{} authenticated as {} in guild {} ({})", author.username, name, guild.name, guild.id);
        Ok(AuthenticationResult::Success {
            description: format!("{} authenticated as **{}**", author.mention(), name),
            display_name: name,
        })
    }
}

/// Build the member's display name from first and last name tokens
pub fn display_name(first: &str, last: &str) -> String {
    format!("{} {}", title_case(first), title_case(last))
}

/// Upper-case the first letter of every word. A word starts after
/// whitespace or an ASCII character that is not alphanumeric or `_`;
/// other letters are kept as is.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_word_start = true;
    for c in word.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace() || (c.is_ascii() && !(c.is_ascii_alphanumeric() || c == '_'));
    }
    out
}
