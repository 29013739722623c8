//! # RestKit
//!
//! A generic CRUD resource framework for building RESTful APIs in Rust.
//!
//! ## Features
//!
//! - **Resource/Store Architecture**: One entity trait, one store contract, any backend
//! - **Pluggable Persistence**: In-memory and Postgres-backed stores behind one trait
//! - **Generic Controllers**: Verb + path + body mapped onto store operations once, reused per resource
//! - **Explicit Routing**: Routes are registered at startup, no attribute discovery
//! - **Explicit Construction**: Stores and collaborators are passed in, no ambient container
//! - **Stateless Auth**: Signed, time-bounded tokens issued at login, verified per call
//! - **Monotonic Identifiers**: Store-owned id allocation, never derived from collection size
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restkit::prelude::*;
//!
//! // Define a resource (id is store-assigned, omitted from POST bodies)
//! resource!(Book, "book", "books", {
//!     title: String,
//!     author: String,
//!     year: i32,
//! });
//!
//! // Wire it up
//! let store = InMemoryResourceStore::<Book>::new();
//! let app = ServerBuilder::new()
//!     .register_resource(store)
//!     .build();
//!
//! // GET/POST /books, GET/PUT/DELETE /books/{id} are now live.
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{Claims, CredentialValidator, StaticUserDirectory, TokenSigner},
        error::{ApiError, ErrorBody, StoreError},
        resource::{Resource, ResourceId},
        store::ResourceStore,
    };

    // === Macros ===
    pub use crate::resource;

    // === Storage ===
    pub use crate::storage::InMemoryResourceStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresResourceStore;

    // === Config ===
    pub use crate::config::{AppConfig, AuthConfig, ServerConfig, UserEntry};

    // === Server ===
    pub use crate::server::{ServerBuilder, auth_routes, resource_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get, post, put},
    };
}
