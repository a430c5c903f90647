//! Account link repository over the game database.
//!
//! All link statements are built from the `entity::account_link` query
//! builder and executed through the query gateway, so session scoping and
//! commit semantics live in one place. The `discord_links` table is owned by
//! the game server: this repository never inserts or deletes rows, it only
//! resolves them and flips `discord_id` / `valid`.

use chrono::{DateTime, Duration, Utc};
use entity::account_link::Column;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, QueryResult,
    QueryTrait,
};

use crate::db::QueryGateway;
use crate::error::database::DatabaseError;
use crate::model::account_link::AccountLink;

/// Validity window of a one-time token after its issue timestamp.
const TOKEN_TTL_HOURS: i64 = 4;

/// Repository providing the link-record operations.
pub struct AccountLinkRepository<'a> {
    gateway: &'a QueryGateway,
}

impl<'a> AccountLinkRepository<'a> {
    pub fn new(gateway: &'a QueryGateway) -> Self {
        Self { gateway }
    }

    /// Oldest timestamp a token may carry and still be consumable.
    fn token_cutoff() -> DateTime<Utc> {
        Utc::now() - Duration::hours(TOKEN_TTL_HOURS)
    }

    /// Resolves the latest unexpired record carrying the given token.
    ///
    /// Does not require `discord_id` to be unset: a consumed token inside its
    /// window re-resolves, which lets a user re-run verification against the
    /// same row.
    ///
    /// # Returns
    /// - `Ok(Some(AccountLink))` - Latest matching record inside the window
    /// - `Ok(None)` - Token unknown or expired
    /// - `Err(DatabaseError)` - Connection or statement failure
    pub async fn find_by_token(&self, token: &str) -> Result<Option<AccountLink>, DatabaseError> {
        let query = entity::prelude::AccountLink::find()
            .filter(Column::OneTimeToken.eq(token))
            .filter(Column::Timestamp.gte(Self::token_cutoff()))
            .order_by_desc(Column::Timestamp)
            .limit(1)
            .into_query();

        let row = self.gateway.fetch_one(&query).await?;
        row.map(into_link).transpose()
    }

    /// Resolves the latest record linked to the given Discord user.
    pub async fn find_by_discord_id(
        &self,
        discord_id: u64,
    ) -> Result<Option<AccountLink>, DatabaseError> {
        let query = entity::prelude::AccountLink::find()
            .filter(Column::DiscordId.eq(discord_id as i64))
            .order_by_desc(Column::Timestamp)
            .limit(1)
            .into_query();

        let row = self.gateway.fetch_one(&query).await?;
        row.map(into_link).transpose()
    }

    /// Resolves the latest completed record for the given ckey.
    pub async fn find_by_ckey(&self, ckey: &str) -> Result<Option<AccountLink>, DatabaseError> {
        let query = entity::prelude::AccountLink::find()
            .filter(Column::Ckey.eq(ckey))
            .filter(Column::DiscordId.is_not_null())
            .order_by_desc(Column::Timestamp)
            .limit(1)
            .into_query();

        let row = self.gateway.fetch_one(&query).await?;
        row.map(into_link).transpose()
    }

    /// Returns all completed records for the given ckey, newest first.
    pub async fn all_by_ckey(&self, ckey: &str) -> Result<Vec<AccountLink>, DatabaseError> {
        let query = entity::prelude::AccountLink::find()
            .filter(Column::Ckey.eq(ckey))
            .filter(Column::DiscordId.is_not_null())
            .order_by_desc(Column::Timestamp)
            .into_query();

        let rows = self.gateway.fetch_all(&query).await?;
        rows.into_iter().map(into_link).collect()
    }

    /// Links the given Discord user to the record carrying the token.
    ///
    /// Updates rows matching the same predicate as [`find_by_token`], setting
    /// `discord_id` and marking the record valid. Any other active record of
    /// the token's ckey, and any previous active record of the claiming user,
    /// is invalidated first: the completed link ends up as the only valid
    /// record for either key. An unknown or expired token matches nothing and
    /// mutates nothing.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows completed (zero when the token expired)
    /// - `Err(DatabaseError)` - Connection or statement failure
    ///
    /// [`find_by_token`]: Self::find_by_token
    pub async fn complete_link(
        &self,
        token: &str,
        discord_id: u64,
    ) -> Result<u64, DatabaseError> {
        let Some(pending) = self.find_by_token(token).await? else {
            return Ok(0);
        };

        if let Some(ckey) = pending.ckey.as_deref() {
            self.invalidate_by_ckey(ckey).await?;
        }
        self.invalidate_by_discord_id(discord_id).await?;

        let query = entity::prelude::AccountLink::update_many()
            .col_expr(Column::DiscordId, Expr::value(discord_id as i64))
            .col_expr(Column::Valid, Expr::value(true))
            .filter(Column::OneTimeToken.eq(token))
            .filter(Column::Timestamp.gte(Self::token_cutoff()))
            .into_query();

        let result = self.gateway.execute(&query).await?;
        Ok(result.rows_affected())
    }

    /// Clears the valid flag on every active record for the given ckey.
    /// Idempotent: rows already invalid are not matched.
    pub async fn invalidate_by_ckey(&self, ckey: &str) -> Result<u64, DatabaseError> {
        let query = entity::prelude::AccountLink::update_many()
            .col_expr(Column::Valid, Expr::value(false))
            .filter(Column::Ckey.eq(ckey))
            .filter(Column::Valid.eq(true))
            .into_query();

        let result = self.gateway.execute(&query).await?;
        Ok(result.rows_affected())
    }

    /// Clears the valid flag on every active record for the given Discord
    /// user. Idempotent: rows already invalid are not matched.
    pub async fn invalidate_by_discord_id(&self, discord_id: u64) -> Result<u64, DatabaseError> {
        let query = entity::prelude::AccountLink::update_many()
            .col_expr(Column::Valid, Expr::value(false))
            .filter(Column::DiscordId.eq(discord_id as i64))
            .filter(Column::Valid.eq(true))
            .into_query();

        let result = self.gateway.execute(&query).await?;
        Ok(result.rows_affected())
    }
}

/// Converts a raw gateway row into the domain model.
fn into_link(row: QueryResult) -> Result<AccountLink, DatabaseError> {
    let model = entity::account_link::Model::from_query_result(&row, "")
        .map_err(DatabaseError::Statement)?;
    Ok(AccountLink::from_entity(model))
}
