//! Content resolver - finds a source file for a language, falling back to the
//! default language

use std::path::PathBuf;

use super::LanguageDirectory;

/// A source file located on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Logical filename as declared in the content spec
    pub filename: String,
    /// Code of the language the file was found in
    pub language: String,
    /// Full path of the file
    pub path: PathBuf,
}

/// Outcome of looking up one file for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Present in the requested language
    Found(ResolvedFile),
    /// Absent in the requested language, present in the default one
    FoundFallback(ResolvedFile),
    /// Absent in both
    NotFound,
}

impl Resolution {
    /// The resolved file, if any
    pub fn file(&self) -> Option<&ResolvedFile> {
        match self {
            Resolution::Found(file) | Resolution::FoundFallback(file) => Some(file),
            Resolution::NotFound => None,
        }
    }
}

/// Resolves logical filenames against language directories
pub struct Resolver {
    default_language: LanguageDirectory,
}

impl Resolver {
    /// Create a resolver falling back to `default_language`
    pub fn new(default_language: LanguageDirectory) -> Self {
        if !default_language.path.is_dir() {
            tracing::warn!(
                "Default language directory {:?} does not exist, fallbacks will fail",
                default_language.path
            );
        }
        Self { default_language }
    }

    /// Look up `filename` in `language`, then in the default language,
    /// reporting misses
    pub fn resolve(&self, language: &LanguageDirectory, filename: &str) -> Resolution {
        let resolution = self.locate(language, filename);

        match &resolution {
            Resolution::Found(_) => {
                tracing::debug!("Resolved {} in {}", filename, language.code);
            }
            Resolution::FoundFallback(file) => {
                tracing::warn!(
                    "«{}» does not exist in {}, using {}",
                    filename,
                    language.code,
                    file.language
                );
            }
            Resolution::NotFound if language.code == self.default_language.code => {
                tracing::warn!("«{}» not found in {}, skipping", filename, language.code);
            }
            Resolution::NotFound => {
                tracing::warn!(
                    "«{}» does not exist in {} nor in {}, skipping",
                    filename,
                    language.code,
                    self.default_language.code
                );
            }
        }

        resolution
    }

    /// Same lookup as [`Resolver::resolve`], without diagnostics
    ///
    /// Only checks for existence, never creates or modifies files.
    pub fn locate(&self, language: &LanguageDirectory, filename: &str) -> Resolution {
        let path = language.path.join(filename);
        if path.exists() {
            return Resolution::Found(ResolvedFile {
                filename: filename.to_string(),
                language: language.code.clone(),
                path,
            });
        }

        // One level of fallback only
        if language.code == self.default_language.code {
            return Resolution::NotFound;
        }

        let fallback = self.default_language.path.join(filename);
        if fallback.exists() {
            return Resolution::FoundFallback(ResolvedFile {
                filename: filename.to_string(),
                language: self.default_language.code.clone(),
                path: fallback,
            });
        }

        Resolution::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    /// Log sink shared between the subscriber and the test
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` and return what it logged at warn level and above
    fn warnings_of(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        log.contents()
    }

    fn setup() -> (TempDir, LanguageDirectory, LanguageDirectory) {
        let tmp = TempDir::new().unwrap();
        let en = LanguageDirectory::new(tmp.path(), "en", "lproj");
        let de = LanguageDirectory::new(tmp.path(), "de", "lproj");
        fs::create_dir_all(&en.path).unwrap();
        fs::create_dir_all(&de.path).unwrap();
        fs::write(en.path.join("Both.md"), "# en").unwrap();
        fs::write(de.path.join("Both.md"), "# de").unwrap();
        fs::write(en.path.join("EnglishOnly.md"), "# en").unwrap();
        (tmp, en, de)
    }

    #[test]
    fn test_resolve_in_requested_language() {
        let (_tmp, en, de) = setup();
        let resolver = Resolver::new(en);
        let resolution = resolver.resolve(&de, "Both.md");
        assert_eq!(
            resolution,
            Resolution::Found(ResolvedFile {
                filename: "Both.md".into(),
                language: "de".into(),
                path: de.path.join("Both.md"),
            })
        );
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let (_tmp, en, de) = setup();
        let resolver = Resolver::new(en.clone());
        match resolver.resolve(&de, "EnglishOnly.md") {
            Resolution::FoundFallback(file) => {
                assert_eq!(file.language, "en");
                assert_eq!(file.path, en.path.join("EnglishOnly.md"));
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_not_found() {
        let (_tmp, en, de) = setup();
        let resolver = Resolver::new(en.clone());
        assert_eq!(resolver.resolve(&de, "Missing.md"), Resolution::NotFound);
        assert_eq!(resolver.resolve(&en, "Missing.md"), Resolution::NotFound);
        assert!(resolver.resolve(&de, "Missing.md").file().is_none());
    }

    #[test]
    fn test_resolve_warns_on_misses() {
        let (_tmp, en, de) = setup();
        let resolver = Resolver::new(en.clone());

        let fallback = warnings_of(|| {
            resolver.resolve(&de, "EnglishOnly.md");
        });
        assert!(fallback.contains("WARN"));
        assert!(fallback.contains("«EnglishOnly.md» does not exist in de, using en"));

        let missing = warnings_of(|| {
            resolver.resolve(&de, "Missing.md");
        });
        assert!(missing.contains("«Missing.md» does not exist in de nor in en"));

        let missing_default = warnings_of(|| {
            resolver.resolve(&en, "Missing.md");
        });
        assert!(missing_default.contains("«Missing.md» not found in en"));

        let found = warnings_of(|| {
            resolver.resolve(&de, "Both.md");
            resolver.locate(&de, "Missing.md");
        });
        assert!(found.is_empty());
    }

    #[test]
    fn test_locate_matches_resolve() {
        let (_tmp, en, de) = setup();
        let resolver = Resolver::new(en);
        for name in ["Both.md", "EnglishOnly.md", "Missing.md"] {
            assert_eq!(resolver.locate(&de, name), resolver.resolve(&de, name));
        }
    }

    #[test]
    fn test_resolve_does_not_create_files() {
        let (_tmp, en, de) = setup();
        let resolver = Resolver::new(en);
        let _ = resolver.resolve(&de, "Missing.md");
        assert!(!de.path.join("Missing.md").exists());
    }
}
