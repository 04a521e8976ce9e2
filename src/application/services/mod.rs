// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::records::RecordCommandService, error::ApplicationResult,
        ports::SlugGeneratorPort, queries::records::RecordQueryService,
    },
    domain::{
        record::{Record, RecordReadRepository, RecordWriteRepository},
        slug::{SlugConfig, SlugResolver},
    },
};

/// Wires the slug resolver and the record services for one record type.
pub struct RecordServices<R: Record> {
    pub commands: Arc<RecordCommandService<R>>,
    pub queries: Arc<RecordQueryService<R>>,
    slug_resolver: Arc<SlugResolver<R>>,
}

impl<R: Record> RecordServices<R> {
    pub async fn configure(
        config: SlugConfig<R>,
        read_repo: Arc<dyn RecordReadRepository<R>>,
        write_repo: Arc<dyn RecordWriteRepository<R>>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> ApplicationResult<Self> {
        let slug_resolver = Arc::new(
            SlugResolver::configure(Arc::new(config), Arc::clone(&read_repo), slugger).await?,
        );

        let commands = Arc::new(RecordCommandService::new(
            write_repo,
            read_repo,
            Arc::clone(&slug_resolver),
        ));
        let queries = Arc::new(RecordQueryService::new(Arc::clone(&slug_resolver)));

        Ok(Self {
            commands,
            queries,
            slug_resolver,
        })
    }

    pub fn slug_resolver(&self) -> Arc<SlugResolver<R>> {
        Arc::clone(&self.slug_resolver)
    }
}
