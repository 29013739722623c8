//! Core abstractions: the resource trait, the store contract, errors, and auth.

pub mod auth;
pub mod error;
pub mod resource;
pub mod store;

pub use auth::{Claims, CredentialValidator, StaticUserDirectory, TokenSigner};
pub use error::{ApiError, ErrorBody, StoreError};
pub use resource::{Resource, ResourceId};
pub use store::ResourceStore;
