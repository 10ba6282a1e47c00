// Idempotent schema setup
use sqlx::PgConnection;

use crate::error::DatabaseResult;

/// Create the `config_entries` relation if it does not exist yet.
///
/// Called before every operation; the statement is a no-op once the relation
/// is present, so redundant calls are harmless.
pub async fn ensure_schema(conn: &mut PgConnection) -> DatabaseResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS config_entries (
            project_id TEXT NOT NULL,
            key        TEXT NOT NULL,
            value      TEXT NOT NULL,
            PRIMARY KEY (project_id, key)
        )
        "#,
    )
    .execute(conn)
    .await?;

    Ok(())
}
