// src/infrastructure/repositories/postgres_record.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::record::{CollectionId, RecordStore, Slug};
use async_trait::async_trait;
use sqlx::PgPool;

/// Existence probe backed by one table per collection, each with a `slug`
/// column. `CollectionId` validation restricts table names to the safe
/// identifier subset, which is what permits interpolating it into the query
/// (identifiers cannot be bound as parameters).
#[derive(Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn exists(&self, collection: &CollectionId, slug: &Slug) -> DomainResult<bool> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = $1)",
            collection.as_str()
        );

        let (found,): (bool,) = sqlx::query_as(&query)
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(found)
    }
}
