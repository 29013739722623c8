//! HTTP server layer: generic resource controllers, auth routes, builder

pub mod auth_routes;
pub mod builder;
pub mod handlers;
pub mod router;

pub use auth_routes::{AuthState, LoginRequest, MeResponse, TokenResponse, auth_routes};
pub use builder::{ServerBuilder, init_tracing};
pub use handlers::ResourceState;
pub use router::resource_routes;
