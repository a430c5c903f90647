//! Error types for the account-linking bot.
//!
//! The `AppError` enum is the top-level error type. It wraps configuration
//! errors, game-database errors classified by the query gateway, settings
//! database errors, and Discord API errors. Command handlers bubble these to
//! the message dispatcher, which renders them as a generic failure embed.

pub mod config;
pub mod database;

use thiserror::Error;

use crate::error::{config::ConfigError, database::DatabaseError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error: missing environment variable, unsupported
    /// dialect, or unresolvable database host.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Game-database error, classified as connection or statement failure
    /// by the query gateway.
    #[error(transparent)]
    DatabaseErr(#[from] DatabaseError),

    /// Settings-database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity. Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
