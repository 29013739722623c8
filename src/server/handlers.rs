//! HTTP handlers for resource operations
//!
//! These handlers are generic over the resource type and depend only on the
//! [`ResourceStore`] contract, never on a concrete backend. Each handler maps
//! one (verb, path) pair onto one store call and translates the store's
//! outcome into a status code:
//!
//! - absence (`None` / `false`) → 404
//! - create → 201 with a `Location` header
//! - update/delete success → 204, no body
//! - path/body id mismatch on PUT → 400, checked before the store is touched
//! - write conflict → one existence re-check, then 409 or 404

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header::LOCATION};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::core::error::{ApiError, StoreError};
use crate::core::resource::{Resource, ResourceId};
use crate::core::store::ResourceStore;

/// Per-resource state shared across handlers
#[derive(Clone)]
pub struct ResourceState<T: Resource> {
    pub store: Arc<dyn ResourceStore<T>>,
}

fn store_fault(e: StoreError) -> ApiError {
    match e {
        StoreError::Conflict { resource, id } => ApiError::Conflict { resource, id },
        StoreError::Backend(e) => ApiError::Storage(e.to_string()),
    }
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("invalid request body: {rejection}"))
}

/// GET /{resource}
pub async fn list_resources<T: Resource>(
    State(state): State<ResourceState<T>>,
) -> Result<Json<Vec<T>>, ApiError> {
    let entities = state.store.list().await.map_err(store_fault)?;
    Ok(Json(entities))
}

/// GET /{resource}/{id}
pub async fn get_resource<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<ResourceId>,
) -> Result<Json<T>, ApiError> {
    let entity = state
        .store
        .get(id)
        .await
        .map_err(store_fault)?
        .ok_or(ApiError::NotFound {
            resource: T::resource_name_singular(),
            id,
        })?;

    Ok(Json(entity))
}

/// POST /{resource}
pub async fn create_resource<T: Resource>(
    State(state): State<ResourceState<T>>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(entity) = body.map_err(bad_body)?;

    let created = state.store.create(entity).await.map_err(store_fault)?;
    let location = format!("/{}/{}", T::resource_name(), created.id());

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)).into_response())
}

/// PUT /{resource}/{id}
///
/// Full-field replacement. The path/body identifier check happens before any
/// store call, so a mismatch never reaches persistence — regardless of
/// whether the path id exists.
pub async fn replace_resource<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<ResourceId>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(entity) = body.map_err(bad_body)?;

    if entity.id() != id {
        return Err(ApiError::BadRequest(format!(
            "body id {} does not match path id {id}",
            entity.id()
        )));
    }

    match state.store.update(id, entity).await {
        Ok(Some(_)) => Ok(StatusCode::NO_CONTENT),
        Ok(None) => Err(ApiError::NotFound {
            resource: T::resource_name_singular(),
            id,
        }),
        Err(StoreError::Conflict { resource, .. }) => {
            // Re-check once to distinguish a true write race from a record
            // that was deleted under us; never retried beyond this.
            match state.store.get(id).await.map_err(store_fault)? {
                Some(_) => Err(ApiError::Conflict { resource, id }),
                None => Err(ApiError::NotFound { resource, id }),
            }
        }
        Err(e) => Err(store_fault(e)),
    }
}

/// DELETE /{resource}/{id}
pub async fn delete_resource<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<ResourceId>,
) -> Result<StatusCode, ApiError> {
    let removed = state.store.delete(id).await.map_err(store_fault)?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            resource: T::resource_name_singular(),
            id,
        })
    }
}
