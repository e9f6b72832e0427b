//! Remove built pages

use anyhow::Result;
use std::fs;

use crate::Project;

/// Delete the pages a build writes, leaving anything else in the output
/// directory alone
pub fn run(project: &Project) -> Result<usize> {
    let mut removed = 0;

    for language in project.languages() {
        let out_dir = project.language_output_dir(&language);
        if !out_dir.is_dir() {
            continue;
        }

        for spec in &project.config.files {
            let path = out_dir.join(spec.output_name());
            if path.is_file() {
                fs::remove_file(&path)?;
                tracing::info!("Deleted: {:?}", path);
                removed += 1;
            }
        }

        if fs::read_dir(&out_dir)?.next().is_none() {
            fs::remove_dir(&out_dir)?;
            tracing::info!("Deleted: {:?}", out_dir);
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::content::ContentSpec;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_only_built_pages() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        fs::create_dir_all(base.join("content/en.lproj")).unwrap();
        fs::create_dir_all(base.join("content/de.lproj")).unwrap();
        fs::create_dir_all(base.join("App/en")).unwrap();
        fs::create_dir_all(base.join("App/de")).unwrap();
        fs::write(base.join("App/en/Notes.html"), "built").unwrap();
        fs::write(base.join("App/en/Localizable.strings"), "keep").unwrap();
        fs::write(base.join("App/de/Notes.html"), "built").unwrap();
        fs::write(base.join("App/Info.plist"), "keep").unwrap();

        let config = ProjectConfig {
            files: vec![ContentSpec::Single("Notes.md".into())],
            ..ProjectConfig::default()
        };
        let project = Project::with_config(base, config);

        assert_eq!(run(&project).unwrap(), 2);
        assert!(!base.join("App/en/Notes.html").exists());
        assert!(base.join("App/en/Localizable.strings").exists());
        assert!(!base.join("App/de").exists());
        assert!(base.join("App/Info.plist").exists());
    }
}
