//! Core domain logic for the thought store.
//! This crate is the single source of truth for record-store invariants.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, StoreConfig, OWNER_IDENTITY_ENV};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::thought::{validate_submission, Thought, ThoughtId, ThoughtValidationError};
pub use repo::thought_repo::{InMemoryThoughtRepository, RepoError, RepoResult, ThoughtRepository};
pub use service::shared_store::SharedThoughtStore;
pub use service::thought_service::{StoreError, StoreResult, ThoughtStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
