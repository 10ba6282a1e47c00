use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// True when the store endpoint itself was unreachable, as opposed to a
    /// failure executing a statement on an established connection.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, DatabaseError::ConnectionFailed(_))
    }
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
