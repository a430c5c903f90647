//! Prefix command implementations.
//!
//! Commands are dispatched from the `message` gateway event. Each command
//! returns `Result<(), AppError>`; errors bubble to the dispatcher, which
//! renders them as a generic failure embed.

pub mod database;
pub mod link;
pub mod verify;

use std::time::Duration;

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};

pub const COLOR_SUCCESS: u32 = 0x00FF00;
pub const COLOR_FAILURE: u32 = 0xFF0000;
pub const COLOR_WARNING: u32 = 0xFFFF00;

/// How long outcome and error embeds stay in the channel before self-cleaning.
pub const OUTCOME_TTL: Duration = Duration::from_secs(30);

/// Schedules a message for deletion after the given delay.
///
/// Runs detached; a failed deletion (message already gone, permissions
/// revoked) is logged at debug level and otherwise ignored.
pub(crate) fn delete_after(ctx: &Context, message: Message, delay: Duration) {
    let http = ctx.http.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = message.delete(&http).await {
            tracing::debug!("Failed to delete expired message {}: {}", message.id, e);
        }
    });
}

/// Sends an embed reply in the invoking channel.
pub(crate) async fn reply_embed(
    ctx: &Context,
    message: &Message,
    embed: CreateEmbed,
) -> Result<Message, serenity::Error> {
    message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
}

/// Sends a plain text reply in the invoking channel.
pub(crate) async fn reply_text(
    ctx: &Context,
    message: &Message,
    content: impl Into<String>,
) -> Result<(), serenity::Error> {
    message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().content(content.into()))
        .await?;
    Ok(())
}

/// Whether the message author may run administrator commands.
///
/// True for the guild owner and for members holding a role with the
/// administrator permission, judged from the cached guild.
pub(crate) fn author_is_admin(ctx: &Context, message: &Message) -> bool {
    let Some(guild_id) = message.guild_id else {
        return false;
    };
    let Some(guild) = guild_id.to_guild_cached(&ctx.cache) else {
        return false;
    };

    if guild.owner_id == message.author.id {
        return true;
    }

    let Some(member) = message.member.as_deref() else {
        return false;
    };

    member.roles.iter().any(|role_id| {
        guild
            .roles
            .get(role_id)
            .is_some_and(|role| role.permissions.administrator())
    })
}
