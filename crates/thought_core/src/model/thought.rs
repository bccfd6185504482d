//! Thought domain model.
//!
//! # Responsibility
//! - Define the record shape stored by the thought store.
//! - Own the submission validation rules shared by every repository.
//!
//! # Invariants
//! - `id` is assigned by the store, strictly increasing from 0, never reused.
//! - `content` and `category` are non-empty for every stored thought.
//! - `created_at` is captured once at submission and never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned thought identifier.
pub type ThoughtId = u64;

/// One submitted thought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    pub id: ThoughtId,
    /// Identity of the submitting user, as passed in by the caller.
    pub author: String,
    pub content: String,
    pub category: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Submission rejected before any store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThoughtValidationError {
    EmptyContent,
    EmptyCategory,
}

impl Display for ThoughtValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "invalid content"),
            Self::EmptyCategory => write!(f, "invalid category"),
        }
    }
}

impl Error for ThoughtValidationError {}

/// Validates submission fields.
///
/// Content is checked before category, so a submission with both fields
/// empty reports `EmptyContent`. Only zero length is rejected; whitespace
/// is accepted as-is.
pub fn validate_submission(content: &str, category: &str) -> Result<(), ThoughtValidationError> {
    if content.is_empty() {
        return Err(ThoughtValidationError::EmptyContent);
    }
    if category.is_empty() {
        return Err(ThoughtValidationError::EmptyCategory);
    }
    Ok(())
}

impl Thought {
    /// Re-checks the stored-record invariants.
    pub fn validate(&self) -> Result<(), ThoughtValidationError> {
        validate_submission(&self.content, &self.category)
    }
}
