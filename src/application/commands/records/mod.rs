// src/application/commands/records/mod.rs
mod delete;
mod save;
mod service;

pub use delete::DeleteRecordCommand;
pub use service::RecordCommandService;
