pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{config, health},
    server::StegaStoreServer,
};

/// Create config store routes
pub fn config_routes() -> Router<StegaStoreServer> {
    Router::new()
        .route(paths::config::HYDRATE, post(config::hydrate))
        .route(paths::config::KEYS, get(config::list_keys))
        .route(paths::config::VALUE, get(config::get_value))
        .route(paths::config::VALUE, post(config::set_value))
}

/// Create health check routes
pub fn health_routes() -> Router<StegaStoreServer> {
    Router::new().route(paths::health::HEALTH, get(health::health_check))
}

/// Assemble every route group
pub fn create_routes() -> Router<StegaStoreServer> {
    Router::new().merge(config_routes()).merge(health_routes())
}
