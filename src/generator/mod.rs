//! Generator module - renders every content spec for every language

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::content::{aggregate, ContentLoader, ContentSpec, LanguageDirectory, Resolver};
use crate::templates::TemplateRenderer;
use crate::Project;

/// What a build wrote and skipped
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Languages processed, in order
    pub languages: Vec<String>,
    /// Files written
    pub written: Vec<PathBuf>,
    /// (language, spec output name) pairs with nothing to render
    pub skipped: Vec<(String, String)>,
}

/// Localized page generator
pub struct Generator<'a> {
    project: &'a Project,
    resolver: Resolver,
    loader: ContentLoader,
    renderer: TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator, loading the page template
    pub fn new(project: &'a Project) -> Result<Self> {
        let renderer = TemplateRenderer::load(&project.template_path)
            .with_context(|| format!("Failed to load template {:?}", project.template_path))?;

        Ok(Self {
            project,
            resolver: Resolver::new(project.default_language()),
            loader: ContentLoader::new(),
            renderer,
        })
    }

    /// Generate all pages
    pub fn generate(&self) -> Result<BuildReport> {
        let mut report = BuildReport::default();

        for language in self.project.languages() {
            tracing::info!("Language {}", language.code);
            self.generate_language(&language, &mut report)?;
            report.languages.push(language.code);
        }

        Ok(report)
    }

    /// Generate all pages of one language
    fn generate_language(
        &self,
        language: &LanguageDirectory,
        report: &mut BuildReport,
    ) -> Result<()> {
        let out_dir = self.project.language_output_dir(language);

        for spec in &self.project.config.files {
            match self.generate_page(language, spec, &out_dir)? {
                Some(path) => report.written.push(path),
                None => {
                    tracing::debug!("Nothing to render for {} in {}", spec, language.code);
                    report
                        .skipped
                        .push((language.code.clone(), spec.output_name()));
                }
            }
        }

        Ok(())
    }

    /// Render one spec; `None` if none of its files resolved
    fn generate_page(
        &self,
        language: &LanguageDirectory,
        spec: &ContentSpec,
        out_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        let Some(page) = aggregate(&self.resolver, &self.loader, language, spec)? else {
            return Ok(None);
        };

        let output_path = out_dir.join(&page.output_name);
        self.renderer
            .render_to_file(&page, &output_path)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Wrote {:?}", output_path);

        Ok(Some(output_path))
    }
}
