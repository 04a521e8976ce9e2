use std::sync::Arc;

use crate::domain::{record::Record, slug::SlugResolver};

pub struct RecordQueryService<R: Record> {
    pub(super) slug_resolver: Arc<SlugResolver<R>>,
}

impl<R: Record> RecordQueryService<R> {
    pub fn new(slug_resolver: Arc<SlugResolver<R>>) -> Self {
        Self { slug_resolver }
    }
}
