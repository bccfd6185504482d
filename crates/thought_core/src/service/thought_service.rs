//! Thought store use-case service.
//!
//! # Responsibility
//! - Provide submit/get/list/delete entry points for core callers.
//! - Stamp submissions with the injected clock.
//! - Gate deletion on the configured owner identity.
//!
//! # Invariants
//! - Authorization is checked before existence on delete.
//! - Validation failures never mutate the store.
//! - Log events carry ids and lengths only, never thought content.

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::model::thought::{Thought, ThoughtId, ThoughtValidationError};
use crate::repo::thought_repo::{InMemoryThoughtRepository, RepoError, ThoughtRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome classification for store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Submission content had zero length.
    EmptyContent,
    /// Submission category had zero length.
    EmptyCategory,
    /// Delete attempted by an identity other than the owner.
    NotAuthorized,
    /// Delete targeted an id absent from the primary table.
    NotFound(ThoughtId),
}

impl StoreError {
    /// Stable short code used in log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyContent => "empty_content",
            Self::EmptyCategory => "empty_category",
            Self::NotAuthorized => "not_authorized",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "invalid content"),
            Self::EmptyCategory => write!(f, "invalid category"),
            Self::NotAuthorized => write!(f, "not authorized"),
            Self::NotFound(id) => write!(f, "thought not found: {id}"),
        }
    }
}

impl Error for StoreError {}

impl From<ThoughtValidationError> for StoreError {
    fn from(value: ThoughtValidationError) -> Self {
        match value {
            ThoughtValidationError::EmptyContent => Self::EmptyContent,
            ThoughtValidationError::EmptyCategory => Self::EmptyCategory,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => err.into(),
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Record store binding a repository, a clock, and the owner identity.
pub struct ThoughtStore<R: ThoughtRepository = InMemoryThoughtRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    config: StoreConfig,
}

impl<C: Clock> ThoughtStore<InMemoryThoughtRepository, C> {
    /// Creates an empty in-memory store.
    pub fn new(config: StoreConfig, clock: C) -> Self {
        Self::with_repository(config, InMemoryThoughtRepository::new(), clock)
    }
}

impl<R: ThoughtRepository, C: Clock> ThoughtStore<R, C> {
    /// Creates a store over the provided repository implementation.
    pub fn with_repository(config: StoreConfig, repo: R, clock: C) -> Self {
        Self {
            repo,
            clock,
            config,
        }
    }

    /// Submits a new thought on behalf of `user`.
    ///
    /// # Contract
    /// - Rejects empty content first, then empty category.
    /// - On success the id is appended to both the user and category index.
    /// - Returns the assigned id.
    pub fn submit(&mut self, user: &str, content: &str, category: &str) -> StoreResult<ThoughtId> {
        let created_at = self.clock.now_epoch_ms();
        match self.repo.insert_thought(user, content, category, created_at) {
            Ok(id) => {
                debug!(
                    "event=thought_submit module=store status=ok id={} content_len={} category_len={}",
                    id,
                    content.len(),
                    category.len()
                );
                Ok(id)
            }
            Err(err) => {
                let err = StoreError::from(err);
                debug!(
                    "event=thought_submit module=store status=rejected reason={}",
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Gets one thought by id, or `None` when absent or deleted.
    pub fn get(&self, id: ThoughtId) -> Option<&Thought> {
        self.repo.get_thought(id)
    }

    /// Ids ever submitted by `user`, oldest first.
    ///
    /// Deleted ids stay listed; re-check with `get` before use.
    pub fn get_by_user(&self, user: &str) -> &[ThoughtId] {
        self.repo.ids_by_author(user)
    }

    /// Ids ever submitted under `category`, oldest first.
    ///
    /// Deleted ids stay listed; re-check with `get` before use.
    pub fn get_by_category(&self, category: &str) -> &[ThoughtId] {
        self.repo.ids_by_category(category)
    }

    /// Deletes a thought from the primary table.
    ///
    /// # Errors
    /// - `NotAuthorized` when `caller` is not the owner, whether or not `id` exists.
    /// - `NotFound` when `id` is not in the primary table.
    pub fn delete(&mut self, caller: &str, id: ThoughtId) -> StoreResult<()> {
        if caller != self.config.owner_identity() {
            warn!(
                "event=thought_delete module=store status=denied id={} reason={}",
                id,
                StoreError::NotAuthorized.code()
            );
            return Err(StoreError::NotAuthorized);
        }

        match self.repo.remove_thought(id) {
            Ok(_) => {
                info!("event=thought_delete module=store status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                debug!("event=thought_delete module=store status=not_found id={id}");
                Err(err.into())
            }
        }
    }

    /// Number of thoughts currently stored.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn owner_identity(&self) -> &str {
        self.config.owner_identity()
    }
}
