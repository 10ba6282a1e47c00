// Database connection management
use futures::future::BoxFuture;
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

use crate::error::{DatabaseError, DatabaseResult};

/// Hands out one dedicated connection per logical operation.
///
/// There is no pool and no reuse across requests: every operation connects,
/// runs, and closes. Requests stay fully isolated from each other, and a
/// dropped or failed operation can never poison a shared connection.
#[derive(Debug, Clone)]
pub struct ConnectionManager {
    database_url: String,
}

impl ConnectionManager {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Run `op` with a freshly acquired connection.
    ///
    /// The connection is closed after `op` returns, whether it succeeded or
    /// failed. An unreachable endpoint surfaces as
    /// [`DatabaseError::ConnectionFailed`]; no retry is attempted.
    pub async fn with_connection<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, DatabaseResult<T>>,
    {
        let mut conn = PgConnection::connect(&self.database_url)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        debug!("database connection acquired");

        let result = op(&mut conn).await;

        if let Err(e) = conn.close().await {
            warn!(error = %e, "database connection did not close cleanly");
        } else {
            debug!("database connection released");
        }

        result
    }
}
