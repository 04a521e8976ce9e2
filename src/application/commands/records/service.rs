// src/application/commands/records/service.rs
use std::sync::Arc;

use crate::domain::{
    record::{Record, RecordReadRepository, RecordWriteRepository},
    slug::SlugResolver,
};

pub struct RecordCommandService<R: Record> {
    pub(super) write_repo: Arc<dyn RecordWriteRepository<R>>,
    pub(super) read_repo: Arc<dyn RecordReadRepository<R>>,
    pub(super) slug_resolver: Arc<SlugResolver<R>>,
}

impl<R: Record> RecordCommandService<R> {
    pub fn new(
        write_repo: Arc<dyn RecordWriteRepository<R>>,
        read_repo: Arc<dyn RecordReadRepository<R>>,
        slug_resolver: Arc<SlugResolver<R>>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_resolver,
        }
    }
}
