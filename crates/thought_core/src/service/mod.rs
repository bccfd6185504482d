//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the store's public operations.
//! - Enforce the owner-only deletion gate.
//! - Offer a lock-guarded handle for multi-threaded hosts.

pub mod shared_store;
pub mod thought_service;
