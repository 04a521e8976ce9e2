// tests/support/mocks/repos.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mokkan_slug::domain::errors::{DomainError, DomainResult};
use mokkan_slug::domain::record::{
    CollisionScope, FieldName, Record, RecordId, RecordReadRepository, RecordWriteRepository,
};
use serde::Serialize;

fn field_value<R: Serialize>(record: &R, field: &FieldName) -> Option<String> {
    let value = serde_json::to_value(record).ok()?;
    value.get(field.as_str())?.as_str().map(str::to_string)
}

fn in_scope<R: Record>(record: &R, scope: CollisionScope) -> bool {
    match scope {
        CollisionScope::Collection { collection } => R::COLLECTION == collection,
        CollisionScope::Embedded {
            parent,
            association,
        } => record.parent() == Some(parent) && R::ASSOCIATION == association,
    }
}

/* -------------------------------- InMemoryRecordRepo -------------------------------- */

/// In-memory store keeping records in insertion order.
pub struct InMemoryRecordRepo<R> {
    records: Mutex<Vec<R>>,
    declared: Mutex<Vec<String>>,
    queries: AtomicUsize,
}

impl<R: Record + Clone + Serialize> InMemoryRecordRepo<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            declared: Mutex::new(Vec::new()),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn declared_fields(&self) -> Vec<String> {
        self.declared.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Record + Clone + Serialize> RecordReadRepository<R> for InMemoryRecordRepo<R> {
    async fn declare_field(&self, field: &FieldName) -> DomainResult<()> {
        let mut declared = self.declared.lock().unwrap();
        if !declared.iter().any(|name| name == field.as_str()) {
            declared.push(field.as_str().to_string());
        }
        Ok(())
    }

    async fn find_by_field(
        &self,
        scope: CollisionScope,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Vec<R>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|record| in_scope(*record, scope))
            .filter(|record| field_value(*record, field).as_deref() == Some(value))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<R>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }
}

#[async_trait]
impl<R: Record + Clone + Serialize> RecordWriteRepository<R> for InMemoryRecordRepo<R> {
    async fn insert(&self, mut record: R) -> DomainResult<R> {
        record.state_mut().mark_persisted();
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(DomainError::Conflict("duplicate id".into()));
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, mut record: R) -> DomainResult<R> {
        record.state_mut().mark_persisted();
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(DomainError::NotFound("record not found".into()));
        }
        Ok(())
    }
}

/* -------------------------------- FailingRecordRepo -------------------------------- */

/// Every query fails as if the store were unreachable.
pub struct FailingRecordRepo;

#[async_trait]
impl<R: Record> RecordReadRepository<R> for FailingRecordRepo {
    async fn declare_field(&self, _field: &FieldName) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_field(
        &self,
        _scope: CollisionScope,
        _field: &FieldName,
        _value: &str,
    ) -> DomainResult<Vec<R>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_id(&self, _id: RecordId) -> DomainResult<Option<R>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/* -------------------------------- CollidingRecordRepo -------------------------------- */

/// Reports a foreign record for every slug it is asked about.
pub struct CollidingRecordRepo<R> {
    other: R,
    queries: AtomicUsize,
}

impl<R> CollidingRecordRepo<R> {
    pub fn new(other: R) -> Self {
        Self {
            other,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Record + Clone> RecordReadRepository<R> for CollidingRecordRepo<R> {
    async fn declare_field(&self, _field: &FieldName) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_field(
        &self,
        _scope: CollisionScope,
        _field: &FieldName,
        _value: &str,
    ) -> DomainResult<Vec<R>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(vec![self.other.clone()])
    }

    async fn find_by_id(&self, _id: RecordId) -> DomainResult<Option<R>> {
        Ok(None)
    }
}

/* -------------------------------- FailingWriteRepo -------------------------------- */

/// Rejects every write as if the disk were full.
pub struct FailingWriteRepo;

#[async_trait]
impl<R: Record> RecordWriteRepository<R> for FailingWriteRepo {
    async fn insert(&self, _record: R) -> DomainResult<R> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn update(&self, _record: R) -> DomainResult<R> {
        Err(DomainError::Persistence("disk full".into()))
    }

    async fn delete(&self, _id: RecordId) -> DomainResult<()> {
        Err(DomainError::Persistence("disk full".into()))
    }
}
