//! Language discovery - finds the `<code>.lproj` directories of the source tree

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A localization directory in the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDirectory {
    /// Language code, e.g. `de`
    pub code: String,
    /// Directory name, e.g. `de.lproj`
    pub dir_name: String,
    /// Full path of the directory
    pub path: PathBuf,
}

impl LanguageDirectory {
    pub fn new<P: AsRef<Path>>(source_dir: P, code: &str, suffix: &str) -> Self {
        let dir_name = format!("{}.{}", code, suffix);
        Self {
            code: code.to_string(),
            path: source_dir.as_ref().join(&dir_name),
            dir_name,
        }
    }

    /// Name of this language's directory below the output root
    pub fn output_dir_name(&self, keep_suffix: bool) -> &str {
        if keep_suffix {
            &self.dir_name
        } else {
            &self.code
        }
    }
}

/// Iterate the language directories directly below `source_dir`
///
/// A missing source directory yields nothing.
pub fn languages<'a>(
    source_dir: &Path,
    suffix: &'a str,
) -> impl Iterator<Item = LanguageDirectory> + 'a {
    WalkDir::new(source_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .filter_map(move |e| {
            let dir_name = e.file_name().to_str()?.to_string();
            let code = dir_name.strip_suffix(suffix)?.strip_suffix('.')?;
            if code.is_empty() {
                return None;
            }
            Some(LanguageDirectory {
                code: code.to_string(),
                path: e.path().to_path_buf(),
                dir_name,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_languages_match_suffix() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("en.lproj")).unwrap();
        fs::create_dir(tmp.path().join("de.lproj")).unwrap();
        fs::create_dir(tmp.path().join("assets")).unwrap();
        fs::create_dir(tmp.path().join(".lproj")).unwrap();
        fs::write(tmp.path().join("fr.lproj"), "not a directory").unwrap();

        let found: Vec<_> = languages(tmp.path(), "lproj").collect();
        let codes: Vec<_> = found.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["de", "en"]);
        assert_eq!(found[0].dir_name, "de.lproj");
        assert_eq!(found[0].path, tmp.path().join("de.lproj"));
    }

    #[cfg(unix)]
    #[test]
    fn test_languages_follow_symlinks() {
        let tmp = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("en.lproj")).unwrap();
        std::os::unix::fs::symlink(shared.path(), tmp.path().join("de.lproj")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("fr.lproj")).unwrap();

        let found: Vec<_> = languages(tmp.path(), "lproj").collect();
        let codes: Vec<_> = found.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["de", "en"]);
        assert_eq!(found[0].path, tmp.path().join("de.lproj"));
    }

    #[test]
    fn test_languages_missing_source_dir() {
        let tmp = TempDir::new().unwrap();
        let found: Vec<_> = languages(&tmp.path().join("nope"), "lproj").collect();
        assert!(found.is_empty());
    }

    #[test]
    fn test_output_dir_name() {
        let lang = LanguageDirectory::new("content", "de", "lproj");
        assert_eq!(lang.path, PathBuf::from("content/de.lproj"));
        assert_eq!(lang.output_dir_name(false), "de");
        assert_eq!(lang.output_dir_name(true), "de.lproj");
    }
}
