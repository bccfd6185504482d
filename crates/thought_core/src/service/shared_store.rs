//! Lock-guarded thought store handle for multi-threaded hosts.
//!
//! # Invariants
//! - One mutex covers the primary table, both indices, and the id counter.
//! - Each operation is a single critical section, so readers never observe
//!   an id in an index that is missing from the table or the reverse.

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::model::thought::{Thought, ThoughtId};
use crate::repo::thought_repo::{InMemoryThoughtRepository, ThoughtRepository};
use crate::service::thought_service::{StoreResult, ThoughtStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one shared `ThoughtStore`.
pub struct SharedThoughtStore<R: ThoughtRepository = InMemoryThoughtRepository, C: Clock = SystemClock>
{
    inner: Arc<Mutex<ThoughtStore<R, C>>>,
}

impl<R: ThoughtRepository, C: Clock> Clone for SharedThoughtStore<R, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedThoughtStore<InMemoryThoughtRepository, C> {
    pub fn new(config: StoreConfig, clock: C) -> Self {
        Self::from_store(ThoughtStore::new(config, clock))
    }
}

impl<R: ThoughtRepository, C: Clock> SharedThoughtStore<R, C> {
    pub fn from_store(store: ThoughtStore<R, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn submit(&self, user: &str, content: &str, category: &str) -> StoreResult<ThoughtId> {
        self.lock().submit(user, content, category)
    }

    /// Returns an owned copy so no borrow outlives the lock.
    pub fn get(&self, id: ThoughtId) -> Option<Thought> {
        self.lock().get(id).cloned()
    }

    pub fn get_by_user(&self, user: &str) -> Vec<ThoughtId> {
        self.lock().get_by_user(user).to_vec()
    }

    pub fn get_by_category(&self, category: &str) -> Vec<ThoughtId> {
        self.lock().get_by_category(category).to_vec()
    }

    pub fn delete(&self, caller: &str, id: ThoughtId) -> StoreResult<()> {
        self.lock().delete(caller, id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Runs `f` with exclusive access to the underlying store.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut ThoughtStore<R, C>) -> T) -> T {
        f(&mut *self.lock())
    }

    // Store operations validate before mutating, so a poisoned guard still
    // wraps consistent state.
    fn lock(&self) -> MutexGuard<'_, ThoughtStore<R, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
