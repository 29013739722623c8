//! ServerBuilder for fluent API to build HTTP servers

use crate::config::AuthConfig;
use crate::core::auth::{CredentialValidator, StaticUserDirectory, TokenSigner};
use crate::core::resource::Resource;
use crate::core::store::ResourceStore;
use crate::server::auth_routes::auth_routes;
use crate::server::router::resource_routes;
use anyhow::Result;
use axum::Router;
use chrono::Duration;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for assembling a server from resources and collaborators.
///
/// Everything is passed in explicitly: stores, the user directory, and the
/// token signer are constructor arguments, not entries in an ambient
/// registry.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .register_resource(InMemoryResourceStore::<Book>::new())
///     .with_auth(StaticUserDirectory::new(users), signer)
///     .build();
/// ```
pub struct ServerBuilder {
    routers: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            routers: Vec::new(),
        }
    }

    /// Register a resource type served by the given store.
    ///
    /// Adds the five CRUD routes for `T` under `/{resource_name}`.
    pub fn register_resource<T, S>(mut self, store: S) -> Self
    where
        T: Resource,
        S: ResourceStore<T> + 'static,
    {
        let store: Arc<dyn ResourceStore<T>> = Arc::new(store);
        self.routers.push(resource_routes(store));
        self
    }

    /// Register a resource type served by an already-shared store
    pub fn register_shared_resource<T: Resource>(
        mut self,
        store: Arc<dyn ResourceStore<T>>,
    ) -> Self {
        self.routers.push(resource_routes(store));
        self
    }

    /// Add the auth routes over an explicit directory and signer
    pub fn with_auth(
        mut self,
        directory: impl CredentialValidator + 'static,
        signer: TokenSigner,
    ) -> Self {
        self.routers.push(auth_routes(Arc::new(directory), signer));
        self
    }

    /// Add the auth routes from configuration (static user directory)
    pub fn with_auth_config(self, config: &AuthConfig) -> Self {
        let directory = StaticUserDirectory::new(
            config
                .users
                .iter()
                .map(|u| (u.username.clone(), u.password.clone()))
                .collect(),
        );
        let signer = TokenSigner::new(
            config.secret.as_bytes().to_vec(),
            Duration::minutes(config.token_ttl_minutes),
        );
        self.with_auth(directory, signer)
    }

    /// Add custom routes that don't fit the CRUD pattern
    /// (health checks, webhooks, custom business endpoints)
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.routers.push(routes);
        self
    }

    /// Merge all registered routers into the final application router,
    /// with request tracing and permissive CORS applied.
    pub fn build(self) -> Router {
        let mut app = Router::new();
        for router in self.routers {
            app = app.merge(router);
        }

        app.layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Build and serve on the given address until the task is cancelled
    pub async fn serve(self, bind: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(bind).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize tracing with an env-filter subscriber.
///
/// Call once at process start; respects `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
