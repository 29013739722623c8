//! Router builder for resource routes

use crate::core::resource::Resource;
use crate::core::store::ResourceStore;
use crate::server::handlers::{
    ResourceState, create_resource, delete_resource, get_resource, list_resources,
    replace_resource,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the five CRUD routes for one resource type over one store.
///
/// The routing table is assembled explicitly at startup:
/// - GET    /{resource}        - List all entities
/// - POST   /{resource}        - Create an entity (201 + Location)
/// - GET    /{resource}/{id}   - Get one entity
/// - PUT    /{resource}/{id}   - Replace an entity (204)
/// - DELETE /{resource}/{id}   - Delete an entity (204)
pub fn resource_routes<T: Resource>(store: Arc<dyn ResourceStore<T>>) -> Router {
    let state = ResourceState { store };
    let collection = format!("/{}", T::resource_name());
    let item = format!("/{}/{{id}}", T::resource_name());

    Router::new()
        .route(
            &collection,
            get(list_resources::<T>).post(create_resource::<T>),
        )
        .route(
            &item,
            get(get_resource::<T>)
                .put(replace_resource::<T>)
                .delete(delete_resource::<T>),
        )
        .with_state(state)
}
