//! The account verification flow.
//!
//! This service makes every database decision of a verification attempt and
//! stays free of Discord side effects; message deletion, embeds, and role
//! grants belong to the command layer. Keeping the flow here lets it run
//! unchanged against an in-memory database in tests.

use crate::data::AccountLinkRepository;
use crate::db::QueryGateway;
use crate::error::database::DatabaseError;
use crate::model::account_link::AccountLink;

/// Terminal outcome of a single verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The caller already holds a valid link; no write was issued. The
    /// command layer re-grants the configured role if it is missing.
    AlreadyLinked(AccountLink),
    /// The supplied token matched and the link is now completed and valid.
    Linked(AccountLink),
    /// No token was supplied and no valid link exists.
    MissingToken,
    /// The token is unknown or older than its validity window.
    InvalidToken,
    /// The completing write reported success but the link could not be read
    /// back. Should not normally happen; signals a write that silently
    /// failed.
    WriteNotVisible,
}

/// Orchestrates a verification attempt against one guild's game database.
pub struct VerificationService<'a> {
    links: AccountLinkRepository<'a>,
}

impl<'a> VerificationService<'a> {
    pub fn new(gateway: &'a QueryGateway) -> Self {
        Self {
            links: AccountLinkRepository::new(gateway),
        }
    }

    /// Runs one verification attempt for the given Discord user.
    ///
    /// Flow: an existing valid link short-circuits without any write; then a
    /// missing token fails with a usage outcome; then the token is resolved
    /// inside its 4-hour window; on a match the link is completed and read
    /// back to confirm the write took.
    ///
    /// # Arguments
    /// - `discord_id` - The caller's Discord user id
    /// - `token` - The one-time token the caller supplied, if any
    ///
    /// # Returns
    /// - `Ok(VerifyOutcome)` - Terminal outcome, success or business failure
    /// - `Err(DatabaseError)` - Connection or statement failure
    pub async fn verify(
        &self,
        discord_id: u64,
        token: Option<&str>,
    ) -> Result<VerifyOutcome, DatabaseError> {
        if let Some(link) = self.links.find_by_discord_id(discord_id).await? {
            if link.valid {
                return Ok(VerifyOutcome::AlreadyLinked(link));
            }
        }

        let Some(token) = token else {
            return Ok(VerifyOutcome::MissingToken);
        };

        if self.links.find_by_token(token).await?.is_none() {
            return Ok(VerifyOutcome::InvalidToken);
        }

        self.links.complete_link(token, discord_id).await?;

        match self.links.find_by_discord_id(discord_id).await? {
            Some(link) => Ok(VerifyOutcome::Linked(link)),
            None => {
                tracing::warn!(
                    "Link for user {} not readable after completion",
                    discord_id
                );
                Ok(VerifyOutcome::WriteNotVisible)
            }
        }
    }
}
