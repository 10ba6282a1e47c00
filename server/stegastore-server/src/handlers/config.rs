use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use database_layer::{schema, seed, ConfigKeyValue, ConfigStore};
use stega_codec::AnnotationMetadata;

use crate::error::{ApiError, ApiErrorResponse, ApiResult};
use crate::server::StegaStoreServer;
use crate::validation::{parse_set_value, sanitize_value, SetValueRequest};

/// Read a single value, annotated with the current request's coordinates.
///
/// The stored value is always clean; the annotation is applied fresh on
/// every read, so stale metadata from earlier writes can never leak out.
#[utoipa::path(
    get,
    path = "/api/{project_id}/{key}",
    tag = "config",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
        ("key" = String, Path, description = "Configuration key")
    ),
    responses(
        (status = 200, description = "Annotated value", body = String),
        (status = 400, description = "Key not found", body = ApiErrorResponse)
    )
)]
pub async fn get_value(
    State(server): State<StegaStoreServer>,
    Path((project_id, key)): Path<(String, String)>,
) -> ApiResult<Json<String>> {
    info!(%project_id, %key, "GET config value");

    let lookup_project = project_id.clone();
    let lookup_key = key.clone();
    let stored = server
        .connections
        .with_connection(move |conn| {
            Box::pin(async move {
                schema::ensure_schema(conn).await?;
                ConfigStore::get_value(conn, &lookup_project, &lookup_key).await
            })
        })
        .await?;

    let value = stored.ok_or(ApiError::KeyNotFound)?;
    let metadata = AnnotationMetadata::new(project_id, key);
    Ok(Json(server.codec.combine(&value, &metadata)))
}

/// List every entry for a project.
#[utoipa::path(
    get,
    path = "/api/{project_id}/keys",
    tag = "config",
    params(
        ("project_id" = String, Path, description = "Project identifier")
    ),
    responses(
        (status = 200, description = "Entries for the project", body = [ConfigKeyValue])
    )
)]
pub async fn list_keys(
    State(server): State<StegaStoreServer>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Vec<ConfigKeyValue>>> {
    info!(%project_id, "GET config listing");

    let project = project_id;
    let entries = server
        .connections
        .with_connection(move |conn| {
            Box::pin(async move {
                schema::ensure_schema(conn).await?;
                ConfigStore::list_entries(conn, &project).await
            })
        })
        .await?;

    Ok(Json(entries))
}

/// Write a value, stripping any embedded annotation first.
#[utoipa::path(
    post,
    path = "/api/{project_id}/{key}",
    tag = "config",
    params(
        ("project_id" = String, Path, description = "Project identifier"),
        ("key" = String, Path, description = "Configuration key")
    ),
    request_body = SetValueRequest,
    responses(
        (status = 200, description = "Cleaned value as stored", body = String),
        (status = 400, description = "Invalid request", body = ApiErrorResponse)
    )
)]
pub async fn set_value(
    State(server): State<StegaStoreServer>,
    Path((project_id, key)): Path<(String, String)>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<String>> {
    info!(%project_id, %key, "POST config value");

    let payload = parse_set_value(body)?;
    let cleaned = sanitize_value(server.codec.as_ref(), &payload.value)?;

    let value = cleaned.clone();
    server
        .connections
        .with_connection(move |conn| {
            Box::pin(async move {
                schema::ensure_schema(conn).await?;
                ConfigStore::set_value(conn, &project_id, &key, &value).await
            })
        })
        .await?;

    Ok(Json(cleaned))
}

/// Seed the demo project.
#[utoipa::path(
    post,
    path = "/api/hydrate",
    tag = "config",
    responses(
        (status = 200, description = "Demo dataset hydrated")
    )
)]
pub async fn hydrate(State(server): State<StegaStoreServer>) -> ApiResult<StatusCode> {
    info!("POST hydrate demo project");

    server
        .connections
        .with_connection(|conn| Box::pin(seed::seed(conn)))
        .await?;

    Ok(StatusCode::OK)
}
