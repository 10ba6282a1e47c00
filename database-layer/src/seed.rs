// Demo dataset hydration
use sqlx::PgConnection;
use tracing::info;

use crate::config_repository::ConfigStore;
use crate::error::DatabaseResult;
use crate::schema;

/// Project the demo dataset is written under.
pub const DEMO_PROJECT_ID: &str = "demo";

const DEMO_ENTRIES: &[(&str, &str)] = &[
    ("title", "The Return of the Sith"),
    ("rating", "best of the prequels"),
    ("hello", "there"),
];

/// Seed the demo project under a single connection.
///
/// Ensures schema presence, then upserts the fixed entries. Re-running
/// overwrites with the same values, so hydration is idempotent. Not part of
/// the steady-state request path.
pub async fn seed(conn: &mut PgConnection) -> DatabaseResult<()> {
    schema::ensure_schema(conn).await?;

    for (key, value) in DEMO_ENTRIES {
        ConfigStore::set_value(conn, DEMO_PROJECT_ID, key, value).await?;
    }

    info!(
        project_id = DEMO_PROJECT_ID,
        entries = DEMO_ENTRIES.len(),
        "demo dataset hydrated"
    );
    Ok(())
}
