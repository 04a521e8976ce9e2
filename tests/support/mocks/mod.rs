// tests/support/mocks/mod.rs
pub mod repos;

pub use repos::{CollidingRecordRepo, FailingRecordRepo, FailingWriteRepo, InMemoryRecordRepo};
