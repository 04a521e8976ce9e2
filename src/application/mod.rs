pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
