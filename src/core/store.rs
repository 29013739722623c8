//! Store contract for resource persistence

use crate::core::error::StoreError;
use crate::core::resource::{Resource, ResourceId};
use async_trait::async_trait;

/// Persistence contract for a single resource type.
///
/// Implementations provide the five CRUD operations over one keyed
/// collection. The framework is agnostic to the underlying storage
/// mechanism: handlers depend only on this trait.
///
/// Absence is never an error. `get` and `update` report a missing id through
/// `Option`, `delete` through its boolean; the error channel is reserved for
/// true faults (backend connectivity, write conflicts).
///
/// Mutating operations must be serialized with respect to each other:
/// concurrent creates must not allocate duplicate ids, and a delete racing an
/// update to the same id must resolve deterministically, with the loser
/// observing the post-delete absence.
#[async_trait]
pub trait ResourceStore<T: Resource>: Send + Sync {
    /// List all resources, in insertion order of the currently-present set.
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Get a resource by id, or `None` if absent.
    async fn get(&self, id: ResourceId) -> Result<Option<T>, StoreError>;

    /// Store a new resource under a freshly allocated id.
    ///
    /// Any id carried by `entity` is discarded. Returns the stored resource
    /// including its assigned id.
    async fn create(&self, entity: T) -> Result<T, StoreError>;

    /// Replace the resource stored under `id` with `entity`'s fields.
    ///
    /// Full-field replacement; the stored identity is preserved regardless of
    /// the id carried by `entity`. Returns `None` if no resource with `id`
    /// exists. ORM-backed stores may return [`StoreError::Conflict`] when a
    /// versioned write loses a race; callers re-check existence exactly once
    /// before surfacing the conflict.
    async fn update(&self, id: ResourceId, entity: T) -> Result<Option<T>, StoreError>;

    /// Remove the resource with `id` if present; reports whether removal
    /// occurred.
    async fn delete(&self, id: ResourceId) -> Result<bool, StoreError>;
}
