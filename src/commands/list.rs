//! List project content

use anyhow::Result;

use crate::content::{Resolution, Resolver};
use crate::Project;

/// List project content by type
pub fn run(project: &Project, content_type: &str) -> Result<()> {
    match content_type {
        "language" | "languages" => {
            let languages: Vec<_> = project.languages().collect();
            println!("Languages ({}):", languages.len());
            for language in languages {
                let marker = if language.code == project.config.default_language {
                    " (default)"
                } else {
                    ""
                };
                println!("  {}{} [{}]", language.code, marker, language.path.display());
            }
        }
        "file" | "files" => {
            println!("Files ({}):", project.config.files.len());
            for spec in &project.config.files {
                println!("  {} [{}]", spec, spec.output_name());
            }
        }
        "missing" => {
            for line in missing_report(project) {
                println!("{}", line);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: languages, files, missing",
                content_type
            );
        }
    }

    Ok(())
}

/// Per language, the declared files that fall back or are missing everywhere
pub fn missing_report(project: &Project) -> Vec<String> {
    let resolver = Resolver::new(project.default_language());
    let mut lines = Vec::new();

    for language in project.languages() {
        let mut fallback: Vec<&str> = Vec::new();
        let mut missing: Vec<&str> = Vec::new();

        for spec in &project.config.files {
            for filename in spec.files() {
                let bucket = match resolver.locate(&language, filename) {
                    Resolution::Found(_) => continue,
                    Resolution::FoundFallback(_) => &mut fallback,
                    Resolution::NotFound => &mut missing,
                };
                if !bucket.contains(&filename.as_str()) {
                    bucket.push(filename.as_str());
                }
            }
        }

        lines.push(format!(
            "{}: {} from {}, {} missing",
            language.code,
            fallback.len(),
            project.config.default_language,
            missing.len()
        ));
        for filename in fallback {
            lines.push(format!("  ~ {}", filename));
        }
        for filename in missing {
            lines.push(format!("  x {}", filename));
        }
    }

    lines
}
