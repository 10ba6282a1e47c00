//! Route path constants
//!
//! `/api/hydrate` and the `/keys` listing are static segments deliberately
//! registered alongside the `{project_id}/{key}` captures; the router
//! matches static segments before captures.

pub mod config {
    pub const VALUE: &str = "/api/:project_id/:key";
    pub const KEYS: &str = "/api/:project_id/keys";
    pub const HYDRATE: &str = "/api/hydrate";
}

pub mod health {
    pub const HEALTH: &str = "/health";
}
