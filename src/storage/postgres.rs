//! Postgres-backed implementation of ResourceStore
//!
//! One table per resource type: `id BIGSERIAL PRIMARY KEY`, a `version`
//! column for optimistic concurrency, and the entity payload as `JSONB`.
//! Id allocation is delegated to the table's sequence, which is monotonic
//! and never reuses values after deletes. Transactional and isolation
//! guarantees are Postgres's own.

use crate::core::error::StoreError;
use crate::core::resource::{Resource, ResourceId};
use crate::core::store::ResourceStore;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::marker::PhantomData;

/// Resource store backed by a Postgres table.
///
/// `update` is version-checked: a write that loses a race against a
/// concurrent mutation affects zero rows and surfaces as
/// [`StoreError::Conflict`] rather than silently overwriting.
pub struct PostgresResourceStore<T> {
    pool: PgPool,
    table: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> PostgresResourceStore<T> {
    /// Create a store over an existing connection pool.
    ///
    /// The table name is the resource's plural name; call [`ensure_table`]
    /// before first use.
    ///
    /// [`ensure_table`]: PostgresResourceStore::ensure_table
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table: T::resource_name(),
            _marker: PhantomData,
        }
    }

    /// Create the backing table if it does not exist yet
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                version BIGINT NOT NULL DEFAULT 1,
                data JSONB NOT NULL
            )",
            self.table
        );
        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(into_backend)?;
        Ok(())
    }

    fn encode(&self, entity: &T) -> Result<serde_json::Value, StoreError> {
        serde_json::to_value(entity)
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("encode {}: {e}", self.table)))
    }

    fn decode(&self, data: serde_json::Value) -> Result<T, StoreError> {
        serde_json::from_value(data)
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("decode {}: {e}", self.table)))
    }
}

fn into_backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(anyhow::Error::new(e))
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for PostgresResourceStore<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let sql = format!("SELECT data FROM {} ORDER BY id", self.table);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(into_backend)?;

        rows.into_iter()
            .map(|row| self.decode(row.get::<serde_json::Value, _>("data")))
            .collect()
    }

    async fn get(&self, id: ResourceId) -> Result<Option<T>, StoreError> {
        let sql = format!("SELECT data FROM {} WHERE id = $1", self.table);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(into_backend)?;

        row.map(|r| self.decode(r.get::<serde_json::Value, _>("data")))
            .transpose()
    }

    async fn create(&self, mut entity: T) -> Result<T, StoreError> {
        let mut tx = self.pool.begin().await.map_err(into_backend)?;

        // Allocate the id from the sequence first so the stored payload
        // carries it.
        let insert = format!(
            "INSERT INTO {} (data) VALUES ('null'::jsonb) RETURNING id",
            self.table
        );
        let id: i64 = sqlx::query(&insert)
            .fetch_one(&mut *tx)
            .await
            .map_err(into_backend)?
            .get("id");

        entity.assign_id(id);
        let data = self.encode(&entity)?;

        let fill = format!("UPDATE {} SET data = $2 WHERE id = $1", self.table);
        sqlx::query(&fill)
            .bind(id)
            .bind(data)
            .execute(&mut *tx)
            .await
            .map_err(into_backend)?;

        tx.commit().await.map_err(into_backend)?;

        tracing::debug!(resource = T::resource_name_singular(), id, "created");
        Ok(entity)
    }

    async fn update(&self, id: ResourceId, mut entity: T) -> Result<Option<T>, StoreError> {
        let select = format!("SELECT version FROM {} WHERE id = $1", self.table);
        let Some(row) = sqlx::query(&select)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(into_backend)?
        else {
            return Ok(None);
        };
        let version: i64 = row.get("version");

        entity.assign_id(id);
        let data = self.encode(&entity)?;

        let write = format!(
            "UPDATE {} SET data = $2, version = version + 1 WHERE id = $1 AND version = $3",
            self.table
        );
        let result = sqlx::query(&write)
            .bind(id)
            .bind(data)
            .bind(version)
            .execute(&self.pool)
            .await
            .map_err(into_backend)?;

        if result.rows_affected() == 0 {
            // Someone else committed between our read and our write.
            return Err(StoreError::Conflict {
                resource: T::resource_name_singular(),
                id,
            });
        }

        tracing::debug!(resource = T::resource_name_singular(), id, "updated");
        Ok(Some(entity))
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(into_backend)?;

        let removed = result.rows_affected() > 0;
        if removed {
            tracing::debug!(resource = T::resource_name_singular(), id, "deleted");
        }
        Ok(removed)
    }
}
