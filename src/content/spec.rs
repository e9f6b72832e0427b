//! Content specs - the declared pages of a build

use serde::{Deserialize, Serialize};

/// One output page, declared in `_config.yml`
///
/// Either a bare filename (`PrivacyPolicy.md`), whose output name is derived
/// from the input, or an ordered list of files merged into an explicitly
/// named output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentSpec {
    Single(String),
    Merged { files: Vec<String>, output: String },
}

impl ContentSpec {
    /// Source filenames in declared order
    pub fn files(&self) -> &[String] {
        match self {
            ContentSpec::Single(file) => std::slice::from_ref(file),
            ContentSpec::Merged { files, .. } => files,
        }
    }

    /// Explicit output filename, if the spec carries one
    pub fn explicit_output(&self) -> Option<&str> {
        match self {
            ContentSpec::Single(_) => None,
            ContentSpec::Merged { output, .. } => Some(output),
        }
    }

    /// The filename this spec is written to
    pub fn output_name(&self) -> String {
        match self {
            ContentSpec::Single(file) => output_name_for(file),
            ContentSpec::Merged { output, .. } => output.clone(),
        }
    }
}

impl std::fmt::Display for ContentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSpec::Single(file) => write!(f, "{}", file),
            ContentSpec::Merged { files, output } => {
                write!(f, "{} -> {}", files.join(" + "), output)
            }
        }
    }
}

/// Check if a filename is a markdown source
pub fn is_markdown_file(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

/// Output filename for a source file: `.md` becomes `.html`, anything else
/// is kept as is
pub fn output_name_for(filename: &str) -> String {
    if is_markdown_file(filename) {
        format!("{}.html", file_stem(filename))
    } else {
        filename.to_string()
    }
}

/// Filename without its extension
pub fn file_stem(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}
