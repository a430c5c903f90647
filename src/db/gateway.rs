//! Scoped statement execution against one guild's game-database pool.
//!
//! The gateway is the single path through which link statements reach the
//! database. Read statements run in their own scoped session and never
//! commit; write statements run inside a transaction that commits on success
//! and rolls back on every other exit path. Failures are classified as
//! connection vs statement errors and propagated; nothing is retried here.

use sea_orm::sea_query::{SelectStatement, UpdateStatement};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, ExecResult, QueryResult,
    TransactionTrait,
};

use crate::error::database::DatabaseError;

/// Executes statements against a single guild pool.
pub struct QueryGateway {
    db: DatabaseConnection,
}

impl QueryGateway {
    /// Creates a gateway over the given pool handle.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Backend of the underlying pool, for callers that need dialect-aware
    /// statement construction.
    pub fn backend(&self) -> DatabaseBackend {
        self.db.get_database_backend()
    }

    /// Runs a read statement expecting at most one row.
    ///
    /// An empty or unavailable result set normalizes to `None` rather than
    /// an error. Callers constrain the statement itself (`LIMIT 1`) so a
    /// multi-row match cannot be ambiguous.
    ///
    /// # Returns
    /// - `Ok(Some(row))` - Exactly one matching row
    /// - `Ok(None)` - No matching row
    /// - `Err(DatabaseError)` - Connection or statement failure
    pub async fn fetch_one(
        &self,
        query: &SelectStatement,
    ) -> Result<Option<QueryResult>, DatabaseError> {
        self.db
            .query_one(query)
            .await
            .map_err(DatabaseError::classify)
    }

    /// Runs a read statement returning all matching rows in the order the
    /// store delivers them.
    pub async fn fetch_all(
        &self,
        query: &SelectStatement,
    ) -> Result<Vec<QueryResult>, DatabaseError> {
        self.db
            .query_all(query)
            .await
            .map_err(DatabaseError::classify)
    }

    /// Runs a write statement inside a transaction and commits it.
    ///
    /// The transaction rolls back when dropped on any non-commit exit path.
    ///
    /// # Returns
    /// - `Ok(ExecResult)` - Committed, with the affected row count
    /// - `Err(DatabaseError)` - Connection or statement failure; nothing persisted
    pub async fn execute(&self, query: &UpdateStatement) -> Result<ExecResult, DatabaseError> {
        let txn = self.db.begin().await.map_err(DatabaseError::classify)?;

        let result = txn.execute(query).await.map_err(DatabaseError::classify)?;

        txn.commit().await.map_err(DatabaseError::classify)?;

        Ok(result)
    }
}
