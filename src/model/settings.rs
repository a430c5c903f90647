//! Per-guild settings domain model.
//!
//! The recognized guild options form an explicit typed struct with defaults
//! rather than a dynamic key/value map. Settings are persisted in the bot's
//! own database and read whenever a pool is constructed or a verification
//! needs the role / members-only flags.

use std::fmt;
use std::str::FromStr;

use sea_orm::ActiveValue;

use crate::error::{config::ConfigError, AppError};

/// Database backends the connector can speak.
///
/// The driver is implied by the dialect under sqlx, so there is no separate
/// driver dimension to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbDialect {
    Mysql,
    Postgres,
    Sqlite,
}

impl DbDialect {
    /// URL scheme for connection strings of this dialect.
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

impl FromStr for DbDialect {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::Mysql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::UnsupportedDialect(other.to_string())),
        }
    }
}

impl fmt::Display for DbDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Per-guild configuration for the game-database connection and the linking
/// workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSettings {
    pub dialect: DbDialect,
    /// Informational only: the underlying driver is fixed per dialect by
    /// sqlx. Kept as a settable field for interface parity.
    pub driver: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub schema: String,
    /// Role granted to members after successful verification, if configured.
    pub verified_role: Option<u64>,
    /// Whether game-server entry is restricted to guild members.
    pub members_only: bool,
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            dialect: DbDialect::Mysql,
            driver: "sqlx".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "ss13".to_string(),
            password: "password".to_string(),
            schema: "feedback".to_string(),
            verified_role: None,
            members_only: false,
        }
    }
}

impl GuildSettings {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The converted settings
    /// - `Err(AppError::ConfigErr)` - Stored dialect or port is invalid
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, AppError> {
        let dialect = entity.db_dialect.parse::<DbDialect>()?;
        let port = u16::try_from(entity.db_port)
            .map_err(|_| ConfigError::InvalidPort(entity.db_port))?;

        Ok(Self {
            dialect,
            driver: entity.db_driver,
            host: entity.db_host,
            port,
            user: entity.db_user,
            password: entity.db_password,
            schema: entity.db_schema,
            verified_role: entity.verified_role.map(|id| id as u64),
            members_only: entity.members_only,
        })
    }

    /// Builds the active model for persisting these settings for a guild.
    pub fn into_active_model(&self, guild_id: u64) -> entity::guild_settings::ActiveModel {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            db_dialect: ActiveValue::Set(self.dialect.to_string()),
            db_driver: ActiveValue::Set(self.driver.clone()),
            db_host: ActiveValue::Set(self.host.clone()),
            db_port: ActiveValue::Set(i32::from(self.port)),
            db_user: ActiveValue::Set(self.user.clone()),
            db_password: ActiveValue::Set(self.password.clone()),
            db_schema: ActiveValue::Set(self.schema.clone()),
            verified_role: ActiveValue::Set(self.verified_role.map(|id| id as i64)),
            members_only: ActiveValue::Set(self.members_only),
        }
    }
}
