//! Entity model for per-guild bot settings.
//!
//! Stored in the bot's own database. One row per Discord guild, holding the
//! game-database connection parameters and the linking feature flags.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub db_dialect: String,
    pub db_driver: String,
    pub db_host: String,
    pub db_port: i32,
    pub db_user: String,
    pub db_password: String,
    pub db_schema: String,
    /// Role granted on successful verification, if configured.
    pub verified_role: Option<i64>,
    /// Whether game-server entry is restricted to guild members.
    pub members_only: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
