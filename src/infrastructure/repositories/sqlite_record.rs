// src/infrastructure/repositories/sqlite_record.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{
    CollisionScope, FieldName, Record, RecordId, RecordReadRepository, RecordWriteRepository,
};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::SqlitePool;
use std::marker::PhantomData;

/// Stores records of one type as JSON documents in the shared `records`
/// table.
pub struct SqliteRecordStore<R> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> R>,
}

impl<R> SqliteRecordStore<R> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<R> Clone for SqliteRecordStore<R> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

fn encode<R: Serialize>(record: &R) -> DomainResult<String> {
    serde_json::to_string(record)
        .map_err(|err| DomainError::Persistence(format!("failed to encode record: {err}")))
}

fn decode<R: Record + DeserializeOwned>(data: &str) -> DomainResult<R> {
    let mut record: R = serde_json::from_str(data)
        .map_err(|err| DomainError::Persistence(format!("corrupt record document: {err}")))?;
    record.state_mut().mark_persisted();
    Ok(record)
}

fn collection_name<R: Record>() -> DomainResult<FieldName> {
    FieldName::new(R::COLLECTION)
}

fn association_of<R: Record>(record: &R) -> Option<&'static str> {
    record.is_embedded().then_some(R::ASSOCIATION)
}

#[async_trait]
impl<R> RecordReadRepository<R> for SqliteRecordStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    async fn declare_field(&self, field: &FieldName) -> DomainResult<()> {
        let collection = collection_name::<R>()?;
        // Names are validated identifiers, so they can be spliced into the DDL.
        let ddl = format!(
            "CREATE INDEX IF NOT EXISTS records_{collection}_{field}_idx \
             ON records (collection, json_extract(data, '$.{field}'))"
        );
        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        tracing::debug!(collection = %collection, field = %field, "field declared");
        Ok(())
    }

    async fn find_by_field(
        &self,
        scope: CollisionScope,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Vec<R>> {
        let rows = match scope {
            CollisionScope::Collection { collection } => {
                let sql = format!(
                    "SELECT data FROM records \
                     WHERE collection = ? AND json_extract(data, '$.{field}') = ? \
                     ORDER BY rowid"
                );
                sqlx::query_scalar::<_, String>(&sql)
                    .bind(collection)
                    .bind(value)
                    .fetch_all(&self.pool)
                    .await
            }
            CollisionScope::Embedded {
                parent,
                association,
            } => {
                let sql = format!(
                    "SELECT data FROM records \
                     WHERE parent_id = ? AND association = ? \
                     AND json_extract(data, '$.{field}') = ? \
                     ORDER BY rowid"
                );
                sqlx::query_scalar::<_, String>(&sql)
                    .bind(parent.to_string())
                    .bind(association)
                    .bind(value)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        rows.iter().map(|data| decode::<R>(data)).collect()
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<R>> {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT data FROM records WHERE id = ? AND collection = ?",
        )
        .bind(id.to_string())
        .bind(R::COLLECTION)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.as_deref().map(decode::<R>).transpose()
    }
}

#[async_trait]
impl<R> RecordWriteRepository<R> for SqliteRecordStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    async fn insert(&self, mut record: R) -> DomainResult<R> {
        let data = encode(&record)?;

        sqlx::query(
            "INSERT INTO records (id, collection, association, parent_id, data)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.id().to_string())
        .bind(R::COLLECTION)
        .bind(association_of(&record))
        .bind(record.parent().map(|parent| parent.to_string()))
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        record.state_mut().mark_persisted();
        Ok(record)
    }

    async fn update(&self, mut record: R) -> DomainResult<R> {
        let data = encode(&record)?;

        let result = sqlx::query(
            "UPDATE records SET data = ?, association = ?, parent_id = ?
             WHERE id = ? AND collection = ?",
        )
        .bind(data)
        .bind(association_of(&record))
        .bind(record.parent().map(|parent| parent.to_string()))
        .bind(record.id().to_string())
        .bind(R::COLLECTION)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "{} {}",
                R::COLLECTION,
                record.id()
            )));
        }

        record.state_mut().mark_persisted();
        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM records WHERE id = ? AND collection = ?")
            .bind(id.to_string())
            .bind(R::COLLECTION)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("{} {id}", R::COLLECTION)));
        }
        Ok(())
    }
}
