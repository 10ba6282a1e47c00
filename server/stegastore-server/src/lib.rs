//! StegaStore Engine - project-scoped configuration API
//!
//! This library provides the HTTP surface of the StegaStore server: routing,
//! request validation, error mapping, CORS, and OpenAPI documentation.
//! Persistence lives in `database-layer`; the annotation codec lives in
//! `stega-codec` and is injected through the server state.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use error::*;
pub use server::{ServerConfig, StegaStoreServer};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router with all routes and middleware
pub fn create_app(server: StegaStoreServer) -> Router {
    let cors = middleware::create_cors_layer(&server.config.allowed_origins);

    routes::create_routes()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(server)
}
