//! PostgreSQL persistence layer for StegaStore Engine
//!
//! This crate owns everything between the HTTP handlers and the database:
//!
//! - **Connection management**: one dedicated connection per logical
//!   operation, released on every exit path ([`ConnectionManager`])
//! - **Schema setup**: lazy, idempotent creation of the `config_entries`
//!   relation, safe to run before every operation ([`schema::ensure_schema`])
//! - **Config store**: point reads, project listings, and atomic upserts
//!   keyed by `(project_id, key)` ([`ConfigStore`])
//! - **Hydration**: one-shot seeding of the demo project ([`seed::seed`])
//!
//! The store is the sole owner of all entries; nothing is cached in memory
//! between requests, so multiple process instances can share one database
//! with last-write-wins semantics enforced by the upsert statement.

pub mod config_repository;
pub mod connection;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;

pub use config_repository::ConfigStore;
pub use connection::ConnectionManager;
pub use error::{DatabaseError, DatabaseResult};
pub use models::{ConfigEntry, ConfigKeyValue};
