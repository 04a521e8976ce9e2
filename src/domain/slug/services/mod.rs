// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{CollisionScope, Record, RecordId, RecordReadRepository, Slug};
use crate::domain::slug::config::SlugConfig;

/// Domain service responsible for producing unique slugs for one record type.
pub struct SlugResolver<R: Record> {
    config: Arc<SlugConfig<R>>,
    read_repo: Arc<dyn RecordReadRepository<R>>,
    generator: Arc<dyn SlugGenerator>,
}

impl<R: Record> SlugResolver<R> {
    /// Binds `config` to a repository, declaring the slug field on the
    /// record type if the store does not know it yet.
    pub async fn configure(
        config: Arc<SlugConfig<R>>,
        read_repo: Arc<dyn RecordReadRepository<R>>,
        generator: Arc<dyn SlugGenerator>,
    ) -> DomainResult<Self> {
        read_repo.declare_field(config.slug_field()).await?;
        Ok(Self {
            config,
            read_repo,
            generator,
        })
    }

    pub fn config(&self) -> &SlugConfig<R> {
        &self.config
    }

    /// Pre-save step. Returns whether a slug was assigned.
    pub async fn generate_slug(&self, record: &mut R) -> DomainResult<bool> {
        if !self.config.needs_slug(record) {
            return Ok(false);
        }

        let slug = self.find_unique_slug(record).await?;
        tracing::debug!(
            collection = R::COLLECTION,
            record_id = %record.id(),
            slug = %slug,
            "slug assigned"
        );
        self.config.assign(record, slug);
        Ok(true)
    }

    pub async fn find_unique_slug(&self, record: &R) -> DomainResult<Slug> {
        let base = self.slug_base(record);
        let scope = CollisionScope::for_record(record);
        let attempts = self.config.max_attempts();

        for counter in 0..attempts {
            let slug = Slug::new(self.generator.slugify(&candidate_text(&base, counter)))?;
            if self.is_unique(scope, record.id(), &slug).await? {
                return Ok(slug);
            }
            tracing::debug!(slug = %slug, counter, "slug collision");
        }

        tracing::warn!(
            collection = R::COLLECTION,
            base = %base,
            attempts,
            "giving up on slug resolution"
        );
        Err(DomainError::SlugExhausted { base, attempts })
    }

    /// First record in the type's collection carrying `value`.
    pub async fn lookup_slug(&self, value: &str) -> DomainResult<Option<R>> {
        let matches = self
            .read_repo
            .find_by_field(
                CollisionScope::collection_of::<R>(),
                self.config.slug_field(),
                value,
            )
            .await?;
        Ok(matches.into_iter().next())
    }

    /// Like [`Self::lookup_slug`], but a failed query reads as "not found".
    pub async fn find_by_slug(&self, value: &str) -> Option<R> {
        match self.lookup_slug(value).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(error = %err, slug = value, "slug lookup failed");
                None
            }
        }
    }

    pub fn to_param<'a>(&self, record: &'a R) -> Option<&'a str> {
        self.config.current_slug(record).map(Slug::as_str)
    }

    /// Joined source text. When it normalizes to nothing, the record id is
    /// used instead, so slugs are never empty; a blank base would otherwise
    /// yield `""` first and then bare counters (`"1"`, `"2"`, ...).
    fn slug_base(&self, record: &R) -> String {
        let base = self.config.slug_base(record);
        if self.generator.slugify(&base).is_empty() {
            record.id().to_string()
        } else {
            base
        }
    }

    async fn is_unique(
        &self,
        scope: CollisionScope,
        own_id: RecordId,
        slug: &Slug,
    ) -> DomainResult<bool> {
        let matches = self
            .read_repo
            .find_by_field(scope, self.config.slug_field(), slug.as_str())
            .await?;
        // The record's own stored slug is not a collision.
        Ok(matches.iter().all(|other| other.id() == own_id))
    }
}

/// Text fed to the generator for the given attempt. The counter is left
/// blank on the first attempt.
fn candidate_text(base: &str, counter: u32) -> String {
    if counter == 0 {
        format!("{base} ")
    } else {
        format!("{base} {counter}")
    }
}
