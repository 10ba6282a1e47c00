use utoipa::OpenApi;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,

        // Config store endpoints
        crate::handlers::config::get_value,
        crate::handlers::config::list_keys,
        crate::handlers::config::set_value,
        crate::handlers::config::hydrate,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::validation::SetValueRequest,
            crate::error::ApiErrorResponse,
            database_layer::ConfigKeyValue,
        )
    ),
    tags(
        (name = "health", description = "System health endpoints"),
        (name = "config", description = "Project-scoped configuration entries"),
    ),
    info(
        title = "StegaStore Engine API",
        version = "0.1.0",
        description = "Project-scoped key-value configuration store. Values returned by the \
                       single-value read endpoint carry an invisible steganographic annotation; \
                       values accepted on the write path are stripped of any annotation before \
                       they are persisted.",
    )
)]
pub struct ApiDoc;
