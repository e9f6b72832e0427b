//! Content module - language discovery, resolution, loading and aggregation

mod aggregate;
mod language;
mod loader;
mod markdown;
mod resolver;
mod spec;

pub use aggregate::{aggregate, PageContent};
pub use language::{languages, LanguageDirectory};
pub use loader::{ContentLoader, Fragment};
pub use markdown::MarkdownRenderer;
pub use resolver::{Resolution, ResolvedFile, Resolver};
pub use spec::{is_markdown_file, output_name_for, ContentSpec};
