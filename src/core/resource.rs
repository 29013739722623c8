//! Resource trait defining the core abstraction for all stored types

use serde::{Serialize, de::DeserializeOwned};

/// Identifier type for stored resources.
///
/// Ids are assigned by the store at creation time, are unique within a store
/// instance, and are never reused after deletion within a store lifetime.
pub type ResourceId = i64;

/// Base trait for all resources managed by a [`ResourceStore`].
///
/// A resource is a record uniquely identified by `id`. Domain fields are
/// opaque to the store: it only reads and assigns the identity field, and
/// treats the rest of the record as payload.
///
/// The `#[serde(default)]` id convention means POST bodies may omit the id
/// entirely; whatever value the client sends is discarded on create.
///
/// [`ResourceStore`]: crate::core::store::ResourceStore
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "books", "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "book", "product")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this resource instance
    fn id(&self) -> ResourceId;

    /// Overwrite the identifier.
    ///
    /// Called by stores on create (fresh allocation) and on update (to
    /// preserve the stored identity over whatever the payload carried).
    /// Application code should not need to call this.
    fn assign_id(&mut self, id: ResourceId);
}
