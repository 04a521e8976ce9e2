pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Record, RecordState};
pub use repository::{CollisionScope, RecordReadRepository, RecordWriteRepository};
pub use value_objects::{FieldName, RecordId, Slug};
