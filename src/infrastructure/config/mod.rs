//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome {name}! Please set your in-game character with !iam server firstname lastname";

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub discord: DiscordConfig,
    pub welcome: WelcomeConfig,
}

/// Command settings shared read-only with the router and handler
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub prefix: String,
    pub command: String,
    /// Role granted to authenticated members
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiscordConfig {
    pub token: Option<String>,
    pub status: String,
}

/// New member greeting. Accepted and validated, not acted on yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WelcomeConfig {
    pub enabled: bool,
    pub message: String,
    pub channel: String,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub prefix: Option<String>,
    pub role: Option<String>,
    pub command: Option<String>,
    pub status: Option<String>,
    pub welcome: Option<bool>,
    pub welcome_message: Option<String>,
    pub welcome_channel: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            command: "iam".to_string(),
            role: "Members".to_string(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: None,
            status: "github.com/fallendusk/authbot".to_string(),
        }
    }
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            message: DEFAULT_WELCOME_MESSAGE.to_string(),
            channel: String::new(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Apply command line and environment values on top of the file values
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(token) = overrides.token {
            self.discord.token = Some(token);
        }
        if let Some(status) = overrides.status {
            self.discord.status = status;
        }
        if let Some(prefix) = overrides.prefix {
            self.bot.prefix = prefix;
        }
        if let Some(role) = overrides.role {
            self.bot.role = role;
        }
        if let Some(command) = overrides.command {
            self.bot.command = command;
        }
        if let Some(enabled) = overrides.welcome {
            self.welcome.enabled = enabled;
        }
        if let Some(message) = overrides.welcome_message {
            self.welcome.message = message;
        }
        if let Some(channel) = overrides.welcome_channel {
            self.welcome.channel = channel;
        }
        self
    }

    /// Check the settings the bot cannot start without
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token().is_none() {
            return Err(ConfigError::MissingField(
                "token (missing bot token, please specify via --token)".to_string(),
            ));
        }
        if self.bot.prefix.is_empty() {
            return Err(ConfigError::InvalidValue("prefix must not be empty".to_string()));
        }
        if self.bot.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue("cmd must not be empty".to_string()));
        }
        if self.welcome.enabled && (self.welcome.channel.is_empty() || self.welcome.message.is_empty()) {
            return Err(ConfigError::InvalidValue(
                "new user welcome is enabled, but welcome channel or welcome message is not set".to_string(),
            ));
        }
        Ok(())
    }

    /// Non-empty bot token, if one was configured
    pub fn token(&self) -> Option<&str> {
        self.discord.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}
