//! Content loader - reads resolved source files into rendered fragments

use anyhow::{Context, Result};
use std::fs;

use super::spec::{file_stem, is_markdown_file, output_name_for};
use super::{MarkdownRenderer, Resolution, ResolvedFile};

/// One loaded source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Filename the file renders to on its own
    pub output_name: String,
    /// Raw first line for markdown, the filename stem otherwise
    pub title: String,
    /// HTML body
    pub body: String,
}

/// Loads resolved files, converting markdown on the way
pub struct ContentLoader {
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new() -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load a single resolved file
    pub fn load(&self, file: &ResolvedFile) -> Result<Fragment> {
        let content = fs::read_to_string(&file.path)
            .with_context(|| format!("Failed to read {:?}", file.path))?;
        let content = normalize_newlines(content);

        let output_name = output_name_for(&file.filename);

        let fragment = if is_markdown_file(&file.filename) {
            Fragment {
                output_name,
                title: MarkdownRenderer::title(&content).to_string(),
                body: self.renderer.render(&content),
            }
        } else {
            Fragment {
                output_name,
                title: file_stem(&file.filename).to_string(),
                body: content,
            }
        };

        tracing::debug!(
            "Loaded {} from {} ({} bytes)",
            file.filename,
            file.language,
            fragment.body.len()
        );

        Ok(fragment)
    }

    /// Load whatever a resolution found; `None` when nothing was found
    pub fn load_resolution(&self, resolution: &Resolution) -> Result<Option<Fragment>> {
        resolution.file().map(|file| self.load(file)).transpose()
    }
}

/// Convert `\r\n` line endings to `\n`
fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n")
    } else {
        content
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}
