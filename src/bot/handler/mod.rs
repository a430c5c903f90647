use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildId, Member, Message, Ready, User};
use serenity::async_trait;

use crate::db::PoolRegistry;
use crate::service::throttle::CommandThrottle;

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// The bot's own settings database.
    pub db: DatabaseConnection,
    /// Per-guild game-database pools.
    pub registry: Arc<PoolRegistry>,
    /// Rate limiting shared by all verification attempts.
    pub throttle: Arc<CommandThrottle>,
    /// Prefix for chat commands.
    pub prefix: String,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        registry: Arc<PoolRegistry>,
        throttle: Arc<CommandThrottle>,
        prefix: String,
    ) -> Self {
        Self {
            db,
            registry,
            throttle,
            prefix,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(self, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(self, ctx, guild_id, user, member_data_if_available)
            .await;
    }
}
