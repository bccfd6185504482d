//! Thought repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Allocate thought ids and own the primary table.
//! - Maintain the user and category secondary indices.
//!
//! # Invariants
//! - Ids are handed out from a monotonic counter starting at 0.
//! - A rejected insert leaves table, indices, and counter untouched.
//! - `remove_thought` touches the primary table only.

use crate::model::thought::{validate_submission, Thought, ThoughtId, ThoughtValidationError};
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for thought storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ThoughtValidationError),
    NotFound(ThoughtId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "thought not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ThoughtValidationError> for RepoError {
    fn from(value: ThoughtValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for thought storage.
pub trait ThoughtRepository {
    /// Validates and stores a new thought, returning its assigned id.
    fn insert_thought(
        &mut self,
        author: &str,
        content: &str,
        category: &str,
        created_at: i64,
    ) -> RepoResult<ThoughtId>;
    fn get_thought(&self, id: ThoughtId) -> Option<&Thought>;
    /// Ids ever submitted by `author`, in submission order.
    fn ids_by_author(&self, author: &str) -> &[ThoughtId];
    /// Ids ever submitted under `category`, in submission order.
    fn ids_by_category(&self, category: &str) -> &[ThoughtId];
    fn remove_thought(&mut self, id: ThoughtId) -> RepoResult<Thought>;
    /// Number of thoughts currently in the primary table.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Map-backed thought repository.
#[derive(Debug, Default)]
pub struct InMemoryThoughtRepository {
    thoughts: BTreeMap<ThoughtId, Thought>,
    author_index: HashMap<String, Vec<ThoughtId>>,
    category_index: HashMap<String, Vec<ThoughtId>>,
    next_id: ThoughtId,
}

impl InMemoryThoughtRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next accepted insert will receive.
    pub fn next_id(&self) -> ThoughtId {
        self.next_id
    }
}

impl ThoughtRepository for InMemoryThoughtRepository {
    fn insert_thought(
        &mut self,
        author: &str,
        content: &str,
        category: &str,
        created_at: i64,
    ) -> RepoResult<ThoughtId> {
        validate_submission(content, category)?;

        let id = self.next_id;
        self.next_id += 1;

        self.thoughts.insert(
            id,
            Thought {
                id,
                author: author.to_string(),
                content: content.to_string(),
                category: category.to_string(),
                created_at,
            },
        );
        self.author_index
            .entry(author.to_string())
            .or_default()
            .push(id);
        self.category_index
            .entry(category.to_string())
            .or_default()
            .push(id);

        Ok(id)
    }

    fn get_thought(&self, id: ThoughtId) -> Option<&Thought> {
        self.thoughts.get(&id)
    }

    fn ids_by_author(&self, author: &str) -> &[ThoughtId] {
        self.author_index
            .get(author)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn ids_by_category(&self, category: &str) -> &[ThoughtId] {
        self.category_index
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn remove_thought(&mut self, id: ThoughtId) -> RepoResult<Thought> {
        self.thoughts.remove(&id).ok_or(RepoError::NotFound(id))
    }

    fn len(&self) -> usize {
        self.thoughts.len()
    }
}
