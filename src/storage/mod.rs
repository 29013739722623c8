//! Storage backend implementations of the [`ResourceStore`] contract
//!
//! [`ResourceStore`]: crate::core::store::ResourceStore

mod in_memory;
pub use in_memory::InMemoryResourceStore;

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "postgres")]
pub use postgres::PostgresResourceStore;
