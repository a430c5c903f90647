//! Prefix command dispatch from the message event.

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};

use crate::bot::handler::Handler;
use crate::command;

/// Handle message creation in a channel, routing prefix commands.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }
    // Commands are guild-scoped; ignore DMs.
    if message.guild_id.is_none() {
        return;
    }
    let Some(body) = message.content.strip_prefix(&handler.prefix) else {
        return;
    };

    let mut parts = body.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim().to_string();

    let result = match name {
        "verify" => command::verify::run(handler, &ctx, &message, &args).await,
        "database" | "db" => command::database::run(handler, &ctx, &message, &args).await,
        "link" => command::link::run(handler, &ctx, &message, &args).await,
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("Command '{}' failed: {}", name, e);
        let embed = CreateEmbed::new()
            .title("Unexpected error occurred.")
            .description(format!(
                "Please try again. If this error persists, contact staff.\n```\n{e}\n```"
            ))
            .color(command::COLOR_FAILURE);
        match message
            .channel_id
            .send_message(&ctx.http, CreateMessage::new().embed(embed))
            .await
        {
            Ok(sent) => command::delete_after(&ctx, sent, command::OUTCOME_TTL),
            Err(e) => tracing::error!("Failed to report command error: {}", e),
        }
    }
}
