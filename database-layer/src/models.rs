use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored configuration entry.
///
/// `(project_id, key)` is the composite primary key; a write to an existing
/// pair replaces `value` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ConfigEntry {
    pub project_id: String,
    pub key: String,
    pub value: String,
}

/// A `{key, value}` pair as returned by project listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ConfigKeyValue {
    #[schema(example = "title")]
    pub key: String,
    #[schema(example = "Chapter 1")]
    pub value: String,
}
