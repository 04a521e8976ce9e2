use crate::domain::errors::DomainResult;
use crate::domain::record::entity::Record;
use crate::domain::record::value_objects::{FieldName, RecordId};
use async_trait::async_trait;

/// Set of records a slug must be unique within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionScope {
    /// Every record of the type.
    Collection { collection: &'static str },
    /// Siblings inside one parent, under the given association.
    Embedded {
        parent: RecordId,
        association: &'static str,
    },
}

impl CollisionScope {
    pub fn for_record<R: Record>(record: &R) -> Self {
        match record.parent() {
            Some(parent) => Self::Embedded {
                parent,
                association: R::ASSOCIATION,
            },
            None => Self::collection_of::<R>(),
        }
    }

    pub fn collection_of<R: Record>() -> Self {
        Self::Collection {
            collection: R::COLLECTION,
        }
    }
}

#[async_trait]
pub trait RecordReadRepository<R: Record>: Send + Sync {
    /// Register `field` on the record type. Must be idempotent.
    async fn declare_field(&self, field: &FieldName) -> DomainResult<()>;

    /// All records in `scope` whose `field` equals `value`.
    async fn find_by_field(
        &self,
        scope: CollisionScope,
        field: &FieldName,
        value: &str,
    ) -> DomainResult<Vec<R>>;

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<R>>;
}

#[async_trait]
pub trait RecordWriteRepository<R: Record>: Send + Sync {
    async fn insert(&self, record: R) -> DomainResult<R>;
    async fn update(&self, record: R) -> DomainResult<R>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}
