use super::RecordQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::record::Record,
};

pub struct GetRecordBySlugQuery {
    pub slug: String,
}

impl<R: Record> RecordQueryService<R> {
    /// Strict lookup: query failures surface and a missing record is an error.
    pub async fn get_by_slug(&self, query: GetRecordBySlugQuery) -> ApplicationResult<R> {
        let slug = query.slug.trim();
        if slug.is_empty() {
            return Err(ApplicationError::validation("slug cannot be empty"));
        }

        self.slug_resolver
            .lookup_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} {slug}", R::COLLECTION)))
    }

    /// Lenient lookup: `None` both when nothing matches and when the query fails.
    pub async fn find_by_slug(&self, slug: &str) -> Option<R> {
        self.slug_resolver.find_by_slug(slug).await
    }

    pub fn to_param<'a>(&self, record: &'a R) -> Option<&'a str> {
        self.slug_resolver.to_param(record)
    }
}
