// src/application/commands/records/save.rs
use super::RecordCommandService;
use crate::{application::error::ApplicationResult, domain::record::Record};

impl<R: Record> RecordCommandService<R> {
    /// Persists `record`, running the slug step first when the configured
    /// hook covers this save. A failed slug step aborts the write.
    pub async fn save(&self, mut record: R) -> ApplicationResult<R> {
        if self.slug_resolver.config().hook().applies_to(&record) {
            self.slug_resolver.generate_slug(&mut record).await?;
        }

        let saved = if record.is_new_record() {
            self.write_repo.insert(record).await?
        } else {
            self.write_repo.update(record).await?
        };
        Ok(saved)
    }
}
