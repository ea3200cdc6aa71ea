//! Discord adapter

use async_trait::async_trait;
use serenity::all::{
    ActivityData, ChannelId, Client, Context, CreateEmbed, CreateMessage, EditMember, EventHandler,
    GatewayIntents, GuildId, Http, Message, OnlineStatus, Ready, RoleId, ShardManager, UserId,
};
use std::sync::{Arc, OnceLock};
use tokio::sync::{mpsc, RwLock};

use crate::application::errors::PlatformError;
use crate::domain::entities::{Embed, GuildInfo, IncomingMessage, Role, User};
use crate::domain::traits::{BotInfo, ChatPlatformClient};

/// Discord bot adapter backed by serenity
pub struct DiscordAdapter {
    token: String,
    http: Arc<Http>,
    shard_manager: OnceLock<Arc<ShardManager>>,
    presence: Arc<RwLock<Option<String>>>,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            http: Arc::new(Http::new(&token)),
            token,
            shard_manager: OnceLock::new(),
            presence: Arc::new(RwLock::new(None)),
        }
    }

    fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

/// Forwards gateway events into the bot's message channel
struct GatewayHandler {
    events: mpsc::Sender<IncomingMessage>,
    presence: Arc<RwLock<Option<String>>>,
}

#[async_trait]
impl EventHandler for GatewayHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("Bot connected to Discord as {}", ready.user.name);
        if let Some(status) = self.presence.read().await.clone() {
            ctx.set_activity(Some(ActivityData::playing(status)));
        }
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        if self.events.send(to_incoming(&msg)).await.is_err() {
            tracing::debug!("Message receiver closed, dropping message {}", msg.id);
        }
    }
}

fn to_incoming(msg: &Message) -> IncomingMessage {
    let author = User::new(msg.author.id.to_string(), msg.author.name.clone());

    let incoming = IncomingMessage::new(author, msg.channel_id.to_string(), msg.content.clone())
        .with_id(msg.id.to_string());
    match msg.guild_id {
        Some(guild_id) => incoming.in_guild(guild_id.to_string()),
        None => incoming,
    }
}

impl From<serenity::Error> for PlatformError {
    fn from(e: serenity::Error) -> Self {
        PlatformError::Network(e.to_string())
    }
}

fn build_embed(embed: &Embed) -> CreateEmbed {
    CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .colour(embed.colour)
}

/// Parse a snowflake id. Discord ids are never zero.
fn parse_id(kind: &'static str, value: &str) -> Result<u64, PlatformError> {
    value
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| PlatformError::InvalidId {
            kind,
            value: value.to_string(),
        })
}

fn guild_id(value: &str) -> Result<GuildId, PlatformError> {
    parse_id("guild", value).map(GuildId::new)
}

fn user_id(value: &str) -> Result<UserId, PlatformError> {
    parse_id("user", value).map(UserId::new)
}

#[async_trait]
impl ChatPlatformClient for DiscordAdapter {
    async fn connect(&self, events: mpsc::Sender<IncomingMessage>) -> Result<BotInfo, PlatformError> {
        if self.shard_manager.get().is_some() {
            return Err(PlatformError::Network("Already connected".to_string()));
        }

        let me = self.http.get_current_user().await?;
        let info = BotInfo {
            id: me.id.to_string(),
            name: me.name.clone(),
        };

        let handler = GatewayHandler {
            events,
            presence: self.presence.clone(),
        };
        let mut client = Client::builder(&self.token, Self::intents())
            .event_handler(handler)
            .await?;
        let _ = self.shard_manager.set(client.shard_manager.clone());

        tokio::spawn(async move {
            if let Err(e) = client.start().await {
                tracing::error!("Discord gateway stopped: {}", e);
            }
        });

        tracing::info!("Starting Discord bot as {}", info.name);
        Ok(info)
    }

    async fn close(&self) {
        if let Some(shard_manager) = self.shard_manager.get() {
            shard_manager.shutdown_all().await;
            tracing::info!("Discord gateway closed");
        }
    }

    async fn set_presence(&self, status: &str) -> Result<(), PlatformError> {
        *self.presence.write().await = Some(status.to_string());

        let shard_manager = self.shard_manager.get().ok_or(PlatformError::NotConnected)?;
        let runners = shard_manager.runners.lock().await;
        for runner in runners.values() {
            runner
                .runner_tx
                .set_presence(Some(ActivityData::playing(status)), OnlineStatus::Online);
        }
        Ok(())
    }

    async fn rename_member(&self, guild: &str, user: &str, name: &str) -> Result<(), PlatformError> {
        guild_id(guild)?
            .edit_member(self.http.as_ref(), user_id(user)?, EditMember::new().nickname(name))
            .await?;
        Ok(())
    }

    async fn get_guild(&self, guild: &str) -> Result<GuildInfo, PlatformError> {
        let partial = self.http.get_guild(guild_id(guild)?).await?;

        let mut roles: Vec<_> = partial.roles.values().collect();
        roles.sort_by_key(|r| r.id);

        let mut info = GuildInfo::new(partial.id.to_string(), partial.name.clone());
        info.roles = roles
            .into_iter()
            .map(|r| Role::new(r.id.to_string(), r.name.clone()))
            .collect();
        Ok(info)
    }

    async fn add_member_role(&self, guild: &str, user: &str, role: &str) -> Result<(), PlatformError> {
        let role = parse_id("role", role).map(RoleId::new)?;
        self.http
            .add_member_role(guild_id(guild)?, user_id(user)?, role, Some("authenticated via bot command"))
            .await?;
        Ok(())
    }

    async fn send_message(&self, channel: &str, embed: &Embed) -> Result<(), PlatformError> {
        let channel = parse_id("channel", channel).map(ChannelId::new)?;
        channel
            .send_message(self.http.as_ref(), CreateMessage::new().embed(build_embed(embed)))
            .await?;
        Ok(())
    }
}
