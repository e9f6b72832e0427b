//! lproj-content: renders localized app content into per-language pages
//!
//! Each `<code>.lproj` directory of the source tree holds one language's
//! Markdown or HTML files. Every page declared in `_config.yml` is rendered
//! through a single template into `<output>/<language>/`, falling back to
//! the default language for files a translation does not have.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::LanguageDirectory;

/// The project being built
#[derive(Clone)]
pub struct Project {
    /// Project configuration
    pub config: config::ProjectConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory, holding the language directories
    pub source_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Page template
    pub template_path: PathBuf,
}

impl Project {
    /// Create a project from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::ProjectConfig::load(&config_path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            config::ProjectConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a project from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::ProjectConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);
        let output_dir = base_dir.join(&config.output_dir);
        let template_path = base_dir.join(&config.template);

        Self {
            config,
            base_dir,
            source_dir,
            output_dir,
            template_path,
        }
    }

    /// The fallback language directory
    pub fn default_language(&self) -> LanguageDirectory {
        LanguageDirectory::new(
            &self.source_dir,
            &self.config.default_language,
            &self.config.language_suffix,
        )
    }

    /// Language directories present in the source tree
    pub fn languages(&self) -> impl Iterator<Item = LanguageDirectory> + '_ {
        content::languages(&self.source_dir, &self.config.language_suffix)
    }

    /// Output directory of one language
    pub fn language_output_dir(&self, language: &LanguageDirectory) -> PathBuf {
        self.output_dir
            .join(language.output_dir_name(self.config.output_keeps_suffix))
    }

    /// Build all pages for all languages
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove the built pages, returning how many were deleted
    pub fn clean(&self) -> Result<usize> {
        commands::clean::run(self)
    }

    /// Print the localizable strings found in the sources
    pub fn extract(&self, output: Option<&Path>) -> Result<()> {
        commands::extract::run(self, output)
    }
}
