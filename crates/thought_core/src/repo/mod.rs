//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the store service.
//! - Keep table and index bookkeeping out of use-case orchestration.
//!
//! # Invariants
//! - Repository writes must run `validate_submission` before any mutation.
//! - Secondary indices are append-only and are never pruned.

pub mod thought_repo;
