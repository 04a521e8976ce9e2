// src/domain/record/entity.rs
use crate::domain::record::value_objects::RecordId;
use std::collections::HashSet;

/// Persistence bookkeeping carried by every record: whether it has ever
/// been stored, and which fields were assigned since it was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordState {
    new_record: bool,
    changed: HashSet<String>,
}

impl Default for RecordState {
    fn default() -> Self {
        Self {
            new_record: true,
            changed: HashSet::new(),
        }
    }
}

impl RecordState {
    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn mark_changed(&mut self, field: impl Into<String>) {
        self.changed.insert(field.into());
    }

    pub fn is_changed(&self, field: &str) -> bool {
        self.changed.contains(field)
    }

    /// Called by stores after a successful write or a load.
    pub fn mark_persisted(&mut self) {
        self.new_record = false;
        self.changed.clear();
    }
}

/// A persisted entity that can carry a slug.
pub trait Record: Send + Sync + 'static {
    /// Collection holding every record of this type.
    const COLLECTION: &'static str;
    /// Association name under which embedded records of this type live
    /// inside their parent.
    const ASSOCIATION: &'static str = Self::COLLECTION;

    fn id(&self) -> RecordId;
    fn state(&self) -> &RecordState;
    fn state_mut(&mut self) -> &mut RecordState;

    /// Parent record for embedded types.
    fn parent(&self) -> Option<RecordId> {
        None
    }

    fn is_new_record(&self) -> bool {
        self.state().is_new_record()
    }

    fn is_embedded(&self) -> bool {
        self.parent().is_some()
    }

    fn field_changed(&self, field: &str) -> bool {
        self.state().is_changed(field)
    }
}
