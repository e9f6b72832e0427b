//! Project configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::ContentSpec;

/// Main project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    // Directory
    pub source_dir: String,
    pub output_dir: String,
    pub template: String,

    // Languages
    pub default_language: String,
    pub language_suffix: String,
    pub output_keeps_suffix: bool,

    // Content
    pub files: Vec<ContentSpec>,

    // Localizable strings
    #[serde(default)]
    pub strings: StringsConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_dir: "content".to_string(),
            output_dir: "App".to_string(),
            template: "content-templates/App.html".to_string(),

            default_language: "en".to_string(),
            language_suffix: "lproj".to_string(),
            output_keeps_suffix: false,

            files: Vec::new(),

            strings: StringsConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ProjectConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Localizable string extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    /// Glob patterns, relative to the base directory
    pub sources: Vec<String>,
    /// Member that marks a literal as localizable: `"Hello".sccs_loc`
    pub marker: String,
    /// Existing strings table
    pub table: String,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            sources: vec!["Sources/*/*.swift".to_string()],
            marker: "sccs_loc".to_string(),
            table: "en.lproj/Localizable.strings".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.source_dir, "content");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.language_suffix, "lproj");
        assert!(config.files.is_empty());
        assert_eq!(config.strings.marker, "sccs_loc");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
source_dir: c-tracker-sccs-content
output_dir: App
default_language: en
files:
  - PrivacyPolicy.md
  - files: [AboutTheStudy.md, HowItWorks.md]
    output: StudyAndHowItWorks.html
  - Legal.html
strings:
  marker: loc
"#;
        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source_dir, "c-tracker-sccs-content");
        assert_eq!(config.template, "content-templates/App.html");
        assert_eq!(config.files.len(), 3);
        assert_eq!(config.files[0], ContentSpec::Single("PrivacyPolicy.md".into()));
        assert_eq!(
            config.files[1],
            ContentSpec::Merged {
                files: vec!["AboutTheStudy.md".into(), "HowItWorks.md".into()],
                output: "StudyAndHowItWorks.html".into(),
            }
        );
        assert_eq!(config.strings.marker, "loc");
        assert_eq!(config.strings.sources, vec!["Sources/*/*.swift".to_string()]);
    }
}
