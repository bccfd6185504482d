//! Store construction configuration.
//!
//! # Responsibility
//! - Carry the single owner identity permitted to delete thoughts.
//!
//! # Invariants
//! - `owner_identity` is non-blank and stored exactly as supplied.
//! - Configuration is fixed once a store is constructed.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable read by `StoreConfig::from_env`.
pub const OWNER_IDENTITY_ENV: &str = "THOUGHT_OWNER_IDENTITY";

/// Configuration for one thought store instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    owner_identity: String,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingOwnerIdentity,
    EmptyOwnerIdentity,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOwnerIdentity => {
                write!(f, "owner identity is not configured; set {OWNER_IDENTITY_ENV}")
            }
            Self::EmptyOwnerIdentity => write!(f, "owner identity must not be empty"),
        }
    }
}

impl Error for ConfigError {}

impl StoreConfig {
    /// Creates a configuration with an explicit owner identity.
    ///
    /// # Errors
    /// - Returns `EmptyOwnerIdentity` when `owner_identity` is empty or blank.
    pub fn new(owner_identity: impl Into<String>) -> Result<Self, ConfigError> {
        let owner_identity = owner_identity.into();
        if owner_identity.trim().is_empty() {
            return Err(ConfigError::EmptyOwnerIdentity);
        }
        Ok(Self { owner_identity })
    }

    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through a key lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner = lookup(OWNER_IDENTITY_ENV).ok_or(ConfigError::MissingOwnerIdentity)?;
        Self::new(owner)
    }

    pub fn owner_identity(&self) -> &str {
        &self.owner_identity
    }
}
