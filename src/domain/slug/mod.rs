pub mod config;
pub mod services;

pub use config::{SlugConfig, SlugConfigBuilder, SlugHook, SourceField};
pub use services::SlugResolver;
