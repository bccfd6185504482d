//! Domain model for submitted thoughts.
//!
//! # Invariants
//! - Every thought is identified by a store-assigned `ThoughtId`.
//! - Thoughts are immutable after creation; deletion removes them outright.

pub mod thought;
