use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";

pub struct Config {
    /// Connection string for the bot's own settings database.
    pub database_url: String,

    pub discord_bot_token: String,

    /// Prefix for chat commands, defaults to `!`.
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }
}
