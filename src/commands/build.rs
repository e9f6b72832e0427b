//! Build the localized pages

use anyhow::Result;

use crate::generator::{BuildReport, Generator};
use crate::Project;

/// Render every content spec for every language
pub fn run(project: &Project) -> Result<()> {
    run_with_report(project).map(|_| ())
}

/// Build and return what was written and skipped
pub fn run_with_report(project: &Project) -> Result<BuildReport> {
    let start = std::time::Instant::now();

    tracing::info!(
        "Building {} pages from {:?} into {:?}",
        project.config.files.len(),
        project.source_dir,
        project.output_dir
    );

    let generator = Generator::new(project)?;
    let report = generator.generate()?;

    if report.languages.is_empty() {
        tracing::warn!(
            "No *.{} directories found in {:?}",
            project.config.language_suffix,
            project.source_dir
        );
    }

    let duration = start.elapsed();
    tracing::info!(
        "Wrote {} pages for {} languages ({} skipped) in {:.2}s",
        report.written.len(),
        report.languages.len(),
        report.skipped.len(),
        duration.as_secs_f64()
    );

    Ok(report)
}
