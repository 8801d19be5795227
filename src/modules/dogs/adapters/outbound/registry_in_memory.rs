// In memory implementation of the DogRegistry port.
//
// Responsibilities
// - Keep dogs in a map ordered by key. Keys only grow, so key order is insertion order.
// - Run every read-modify-write (create, update) under a single write guard.

use crate::modules::dogs::core::dog::{Dog, DogDraft, DogKind, DogUpdate};
use crate::modules::dogs::core::registry_port::{DogRegistry, EmptyRegistryPolicy, RegistryError};
use crate::modules::dogs::core::seed::seed_dogs;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

pub struct InMemoryDogRegistry {
    dogs: RwLock<BTreeMap<i64, Dog>>,
    empty_policy: EmptyRegistryPolicy,
}

impl InMemoryDogRegistry {
    pub fn new(empty_policy: EmptyRegistryPolicy) -> Self {
        Self {
            dogs: RwLock::new(BTreeMap::new()),
            empty_policy,
        }
    }

    pub fn seeded(empty_policy: EmptyRegistryPolicy) -> Self {
        Self::with_dogs(seed_dogs(), empty_policy)
    }

    pub fn with_dogs(
        dogs: impl IntoIterator<Item = Dog>,
        empty_policy: EmptyRegistryPolicy,
    ) -> Self {
        Self {
            dogs: RwLock::new(dogs.into_iter().map(|dog| (dog.pk, dog)).collect()),
            empty_policy,
        }
    }
}

#[async_trait::async_trait]
impl DogRegistry for InMemoryDogRegistry {
    async fn create(&self, draft: DogDraft) -> Result<Dog, RegistryError> {
        let mut guard = self.dogs.write().await;
        let key = match guard.last_key_value() {
            Some((last, _)) => last + 1,
            None => self.empty_policy.first_key()?,
        };
        let dog = Dog::from_draft(key, draft);
        guard.insert(key, dog.clone());
        tracing::info!(key, name = %dog.name, kind = ?dog.kind, "dog created");
        Ok(dog)
    }

    async fn list(&self, kind: Option<DogKind>) -> Vec<Dog> {
        let guard = self.dogs.read().await;
        let dogs: Vec<Dog> = guard
            .values()
            .filter(|dog| kind.is_none_or(|k| dog.kind == k))
            .cloned()
            .collect();
        tracing::debug!(?kind, count = dogs.len(), "dogs listed");
        dogs
    }

    async fn get(&self, key: i64) -> Result<Dog, RegistryError> {
        self.dogs
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or(RegistryError::NotFound { key })
    }

    async fn update(&self, key: i64, update: DogUpdate) -> Result<Dog, RegistryError> {
        let mut guard = self.dogs.write().await;
        let dog = guard.get_mut(&key).ok_or(RegistryError::NotFound { key })?;
        dog.apply(update);
        tracing::info!(key, name = %dog.name, kind = ?dog.kind, "dog updated");
        Ok(dog.clone())
    }
}
