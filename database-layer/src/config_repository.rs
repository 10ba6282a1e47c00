use sqlx::PgConnection;

use crate::error::DatabaseError;
use crate::models::ConfigKeyValue;

pub type DbResult<T> = Result<T, DatabaseError>;

/// Read and upsert operations over the `config_entries` relation.
///
/// Every operation runs on an already-acquired connection; callers decide
/// the connection scope (see `ConnectionManager::with_connection`).
#[derive(Debug, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Look up the stored value for `(project_id, key)`.
    ///
    /// Returns `None` for a missing key; at most one row can match per the
    /// composite-key constraint.
    pub async fn get_value(
        conn: &mut PgConnection,
        project_id: &str,
        key: &str,
    ) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value
            FROM config_entries
            WHERE project_id = $1 AND key = $2
            "#,
        )
        .bind(project_id)
        .bind(key)
        .fetch_optional(conn)
        .await?;

        Ok(value)
    }

    /// List every entry for a project.
    ///
    /// Returns an empty collection for an unknown project; no ordering is
    /// promised to callers.
    pub async fn list_entries(
        conn: &mut PgConnection,
        project_id: &str,
    ) -> DbResult<Vec<ConfigKeyValue>> {
        let entries = sqlx::query_as::<_, ConfigKeyValue>(
            r#"
            SELECT key, value
            FROM config_entries
            WHERE project_id = $1
            "#,
        )
        .bind(project_id)
        .fetch_all(conn)
        .await?;

        Ok(entries)
    }

    /// Insert or overwrite the value for `(project_id, key)`.
    ///
    /// A single atomic statement: conflict resolution happens in the
    /// database, never as an application-level check-then-act, so concurrent
    /// writers to the same key resolve to last-write-wins even across
    /// process instances.
    pub async fn set_value(
        conn: &mut PgConnection,
        project_id: &str,
        key: &str,
        value: &str,
    ) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO config_entries (project_id, key, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (project_id, key) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(project_id)
        .bind(key)
        .bind(value)
        .execute(conn)
        .await?;

        Ok(())
    }
}
