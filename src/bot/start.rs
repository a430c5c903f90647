use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::db::PoolRegistry;
use crate::error::AppError;
use crate::service::throttle::CommandThrottle;

/// Starts the Discord bot in a blocking manner.
///
/// Creates and starts the Discord bot client; blocks until the bot shuts
/// down.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Settings database connection for the bot to use
/// - `registry` - Per-guild game-database pool registry
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(
    config: &Config,
    db: DatabaseConnection,
    registry: Arc<PoolRegistry>,
) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive.
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents and must be
    // enabled in the Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(
        db,
        registry,
        Arc::new(CommandThrottle::new()),
        config.command_prefix.clone(),
    );

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
