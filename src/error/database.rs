use sea_orm::DbErr;
use thiserror::Error;

/// Game-database failure, split into the two classes the command surface
/// treats differently: connection problems (operator remedy is the
/// `reconnect` command) and statement problems (propagated and logged).
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not provide a connection: host unreachable, pool
    /// exhausted, or checkout timed out.
    #[error("Failed to acquire a database connection: {0}")]
    Connection(#[source] DbErr),

    /// The statement itself failed: malformed SQL, constraint violation,
    /// or a result-set error.
    #[error("Statement execution failed: {0}")]
    Statement(#[source] DbErr),
}

impl DatabaseError {
    /// Classifies a SeaORM error into connection vs statement failure.
    pub fn classify(err: DbErr) -> Self {
        match err {
            e @ (DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => Self::Connection(e),
            e => Self::Statement(e),
        }
    }
}
