// Port for the dog registry.
//
// Responsibilities
// - Describe what the HTTP layer needs from a dog store, without implementing it.
// - Keep key assignment and update semantics behind one trait so every adapter agrees.

use crate::modules::dogs::core::dog::{Dog, DogDraft, DogKind, DogUpdate};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Dog not found")]
    NotFound { key: i64 },

    #[error("Dog registry is empty")]
    EmptyRegistry,
}

/// What `create` does when no key exists yet to derive the next one from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyRegistryPolicy {
    #[default]
    StartAtZero,
    Reject,
}

impl EmptyRegistryPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start_at_zero" => Some(Self::StartAtZero),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn first_key(self) -> Result<i64, RegistryError> {
        match self {
            Self::StartAtZero => Ok(0),
            Self::Reject => Err(RegistryError::EmptyRegistry),
        }
    }
}

#[async_trait]
pub trait DogRegistry: Send + Sync {
    /// Stores a new dog under `max(key) + 1` and returns it with `pk` set to that key.
    async fn create(&self, draft: DogDraft) -> Result<Dog, RegistryError>;

    /// All dogs in insertion order, restricted to `kind` when given.
    async fn list(&self, kind: Option<DogKind>) -> Vec<Dog>;

    async fn get(&self, key: i64) -> Result<Dog, RegistryError>;

    async fn update(&self, key: i64, update: DogUpdate) -> Result<Dog, RegistryError>;
}
