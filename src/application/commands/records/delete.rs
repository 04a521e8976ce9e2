use super::RecordCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::record::{Record, RecordId},
};

pub struct DeleteRecordCommand {
    pub id: RecordId,
}

impl<R: Record> RecordCommandService<R> {
    pub async fn delete(&self, command: DeleteRecordCommand) -> ApplicationResult<()> {
        let DeleteRecordCommand { id } = command;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} {id}", R::COLLECTION)))?;

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
