//! Shared test helpers: an in-memory chat platform that records every call

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Mutex, Once};
use tokio::sync::{mpsc, Notify};

use authbot::application::errors::PlatformError;
use authbot::domain::entities::{Embed, GuildInfo, IncomingMessage, Role, User};
use authbot::domain::traits::{BotInfo, ChatPlatformClient};

pub const BOT_ID: &str = "999";
pub const GUILD_ID: &str = "200";
pub const CHANNEL_ID: &str = "100";

static INIT: Once = Once::new();

pub fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Rename { guild: String, user: String, name: String },
    GetGuild { guild: String },
    AddRole { guild: String, user: String, role: String },
    Send { channel: String, embed: Embed },
    Close,
}

pub struct FakePlatform {
    guild: GuildInfo,
    fail_rename: bool,
    fail_guild: bool,
    fail_send: bool,
    calls: Mutex<Vec<Call>>,
    /// Messages delivered through the event stream on connect
    inbound: Mutex<Vec<IncomingMessage>>,
    /// Keep the event stream open after connect, like a live gateway
    keep_stream: bool,
    events: Mutex<Option<mpsc::Sender<IncomingMessage>>>,
    /// Notified after every sent reply
    pub replied: Notify,
}

impl FakePlatform {
    pub fn new(guild: GuildInfo) -> Self {
        Self {
            guild,
            fail_rename: false,
            fail_guild: false,
            fail_send: false,
            calls: Mutex::new(Vec::new()),
            inbound: Mutex::new(Vec::new()),
            keep_stream: true,
            events: Mutex::new(None),
            replied: Notify::new(),
        }
    }

    /// Guild with `@everyone` and `Members` roles
    pub fn with_members_role() -> Self {
        Self::new(
            GuildInfo::new(GUILD_ID, "Test Guild")
                .with_role(Role::new("10", "@everyone"))
                .with_role(Role::new("11", "Members")),
        )
    }

    pub fn failing_rename(mut self) -> Self {
        self.fail_rename = true;
        self
    }

    pub fn failing_guild(mut self) -> Self {
        self.fail_guild = true;
        self
    }

    pub fn delivering(self, message: IncomingMessage) -> Self {
        self.inbound.lock().unwrap().push(message);
        self
    }

    /// Drop the event stream right after delivering the queued messages
    pub fn dying_gateway(mut self) -> Self {
        self.keep_stream = false;
        self
    }

    pub fn failing_send(mut self) -> Self {
        self.fail_send = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Embed> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send { embed, .. } => Some(embed),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChatPlatformClient for FakePlatform {
    async fn connect(&self, events: mpsc::Sender<IncomingMessage>) -> Result<BotInfo, PlatformError> {
        let inbound: Vec<_> = self.inbound.lock().unwrap().drain(..).collect();
        for message in inbound {
            events.send(message).await.unwrap();
        }
        if self.keep_stream {
            *self.events.lock().unwrap() = Some(events);
        }
        Ok(BotInfo {
            id: BOT_ID.to_string(),
            name: "authbot".to_string(),
        })
    }

    async fn close(&self) {
        self.events.lock().unwrap().take();
        self.record(Call::Close);
    }

    async fn set_presence(&self, _status: &str) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn rename_member(&self, guild: &str, user: &str, name: &str) -> Result<(), PlatformError> {
        self.record(Call::Rename {
            guild: guild.to_string(),
            user: user.to_string(),
            name: name.to_string(),
        });
        if self.fail_rename {
            return Err(PlatformError::Network("missing permissions".to_string()));
        }
        Ok(())
    }

    async fn get_guild(&self, guild: &str) -> Result<GuildInfo, PlatformError> {
        self.record(Call::GetGuild { guild: guild.to_string() });
        if self.fail_guild {
            return Err(PlatformError::Network("guild unavailable".to_string()));
        }
        Ok(self.guild.clone())
    }

    async fn add_member_role(&self, guild: &str, user: &str, role: &str) -> Result<(), PlatformError> {
        self.record(Call::AddRole {
            guild: guild.to_string(),
            user: user.to_string(),
            role: role.to_string(),
        });
        if !self.guild.roles.iter().any(|r| r.id == role) {
            return Err(PlatformError::InvalidId {
                kind: "role",
                value: role.to_string(),
            });
        }
        Ok(())
    }

    async fn send_message(&self, channel: &str, embed: &Embed) -> Result<(), PlatformError> {
        self.record(Call::Send {
            channel: channel.to_string(),
            embed: embed.clone(),
        });
        self.replied.notify_one();
        if self.fail_send {
            return Err(PlatformError::Network("channel closed".to_string()));
        }
        Ok(())
    }
}

pub fn jane() -> User {
    User::new("1", "jane")
}

pub fn guild_message(author: User, content: &str) -> IncomingMessage {
    IncomingMessage::new(author, CHANNEL_ID, content).in_guild(GUILD_ID)
}
