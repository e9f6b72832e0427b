//! Configuration module

mod project;

pub use project::ProjectConfig;
pub use project::StringsConfig;
