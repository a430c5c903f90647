//! Account link domain model.

use chrono::{DateTime, Utc};

/// A row of the game database's `discord_links` table.
///
/// Created by the game server when it issues a one-time token; this bot only
/// completes pending links, invalidates links, or reads them. A record with
/// `discord_id` still unset is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountLink {
    pub id: i32,
    /// Game account identity the token was issued for.
    pub ckey: Option<String>,
    /// Discord user the record is linked to, set once by verification.
    pub discord_id: Option<u64>,
    /// Issue time of the one-time token.
    pub timestamp: DateTime<Utc>,
    pub one_time_token: String,
    /// True marks the currently active link for its ckey / discord id.
    pub valid: bool,
}

impl AccountLink {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::account_link::Model) -> Self {
        Self {
            id: entity.id,
            ckey: entity.ckey,
            discord_id: entity.discord_id.map(|id| id as u64),
            timestamp: entity.timestamp,
            one_time_token: entity.one_time_token,
            valid: entity.valid,
        }
    }
}
