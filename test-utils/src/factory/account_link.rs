//! Account link factory for creating test link rows.
//!
//! This module provides factory methods for creating account link entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test account links with customizable fields.
///
/// Provides a builder pattern for creating link rows with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account_link::AccountLinkFactory;
///
/// let link = AccountLinkFactory::new(&db)
///     .ckey("shadowkoala")
///     .token("secret-token")
///     .discord_id(123456789)
///     .valid(true)
///     .build()
///     .await?;
/// ```
pub struct AccountLinkFactory<'a> {
    db: &'a DatabaseConnection,
    ckey: Option<String>,
    discord_id: Option<i64>,
    timestamp: DateTime<Utc>,
    one_time_token: String,
    valid: bool,
}

impl<'a> AccountLinkFactory<'a> {
    /// Creates a new AccountLinkFactory with default values.
    ///
    /// Defaults:
    /// - ckey: `"player{id}"` where id is auto-incremented
    /// - discord_id: `None` (unclaimed token)
    /// - timestamp: current time
    /// - one_time_token: `"token-{id}"`
    /// - valid: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AccountLinkFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            ckey: Some(format!("player{}", id)),
            discord_id: None,
            timestamp: Utc::now(),
            one_time_token: format!("token-{}", id),
            valid: false,
        }
    }

    /// Sets the ckey for the link.
    ///
    /// # Arguments
    /// - `ckey` - Game server account identifier
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn ckey(mut self, ckey: impl Into<String>) -> Self {
        self.ckey = Some(ckey.into());
        self
    }

    /// Sets the Discord ID claiming the link.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user snowflake
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn discord_id(mut self, discord_id: i64) -> Self {
        self.discord_id = Some(discord_id);
        self
    }

    /// Sets the token issuance timestamp.
    ///
    /// # Arguments
    /// - `issued_at` - When the one-time token was generated
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.timestamp = issued_at;
        self
    }

    /// Sets the one-time token for the link.
    ///
    /// # Arguments
    /// - `token` - Verification token string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.one_time_token = token.into();
        self
    }

    /// Sets whether the link is currently valid.
    ///
    /// # Arguments
    /// - `valid` - Validity flag for the link
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Builds and inserts the account link entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account_link::Model)` - Created link entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account_link::Model, DbErr> {
        entity::account_link::ActiveModel {
            id: ActiveValue::NotSet,
            ckey: ActiveValue::Set(self.ckey),
            discord_id: ActiveValue::Set(self.discord_id),
            timestamp: ActiveValue::Set(self.timestamp),
            one_time_token: ActiveValue::Set(self.one_time_token),
            valid: ActiveValue::Set(self.valid),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account link with default values.
///
/// Shorthand for `AccountLinkFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::account_link::Model)` - Created link entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let link = create_link(&db).await?;
/// ```
pub async fn create_link(db: &DatabaseConnection) -> Result<entity::account_link::Model, DbErr> {
    AccountLinkFactory::new(db).build().await
}
