//! Entity model for the `discord_links` table of the game database.
//!
//! This table is owned by the game server: rows are inserted by the game when
//! it issues a one-time token, and the bot only ever updates `discord_id` and
//! `valid` or reads records. It is never migrated by this application.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Game account identity, up to 32 characters. Populated by the game
    /// server when it issues the token.
    #[sea_orm(column_type = "String(StringLen::N(32))", nullable)]
    pub ckey: Option<String>,
    /// Discord snowflake of the linked user. Null while the link is pending.
    pub discord_id: Option<i64>,
    /// Issue time of the one-time token, assigned by the game server.
    pub timestamp: DateTimeUtc,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub one_time_token: String,
    /// True marks the currently active link for its ckey / discord id.
    pub valid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
