//! In-memory implementation of ResourceStore for testing and development

use crate::core::error::StoreError;
use crate::core::resource::{Resource, ResourceId};
use crate::core::store::ResourceStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory resource store.
///
/// Useful for testing and development. An `IndexMap` behind an `RwLock`
/// preserves insertion order for `list` and serializes mutations, so readers
/// never observe a half-written entity and a delete racing an update
/// resolves deterministically under the write lock.
///
/// Id allocation uses a dedicated monotonic counter, incremented exactly
/// once per successful create and never derived from current collection
/// size, so ids are unique for the store's lifetime even across deletes.
#[derive(Clone)]
pub struct InMemoryResourceStore<T> {
    entries: Arc<RwLock<IndexMap<ResourceId, T>>>,
    next_id: Arc<AtomicI64>,
}

impl<T> InMemoryResourceStore<T> {
    /// Create a new empty store; the first assigned id is 1
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(IndexMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl<T> Default for InMemoryResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for InMemoryResourceStore<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("lock poisoned: {e}")))?;

        Ok(entries.values().cloned().collect())
    }

    async fn get(&self, id: ResourceId) -> Result<Option<T>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("lock poisoned: {e}")))?;

        Ok(entries.get(&id).cloned())
    }

    async fn create(&self, mut entity: T) -> Result<T, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("lock poisoned: {e}")))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.assign_id(id);
        entries.insert(id, entity.clone());

        tracing::debug!(resource = T::resource_name_singular(), id, "created");
        Ok(entity)
    }

    async fn update(&self, id: ResourceId, mut entity: T) -> Result<Option<T>, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("lock poisoned: {e}")))?;

        let Some(slot) = entries.get_mut(&id) else {
            return Ok(None);
        };

        // Full-field replace; the stored identity wins over the payload's id.
        entity.assign_id(id);
        *slot = entity.clone();

        tracing::debug!(resource = T::resource_name_singular(), id, "updated");
        Ok(Some(entity))
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("lock poisoned: {e}")))?;

        // shift_remove keeps the remaining entries in insertion order
        let removed = entries.shift_remove(&id).is_some();
        if removed {
            tracing::debug!(resource = T::resource_name_singular(), id, "deleted");
        }
        Ok(removed)
    }
}
