//! Page template rendering using the Tera template engine
//!
//! A project has exactly one page template. It receives two values,
//! `title` and `content`, both inserted verbatim.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

use crate::content::PageContent;

const TEMPLATE_NAME: &str = "page.html";

/// Variables the page template has to reference
pub const PLACEHOLDERS: [&str; 2] = ["title", "content"];

/// Template loading and rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Template {path:?} never uses `{{{{ {placeholder} }}}}`")]
    MissingPlaceholder { path: PathBuf, placeholder: String },

    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders pages through the project's single template
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Load the template at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TemplateError::NotFound(path.to_path_buf()));
        }

        let source = fs::read_to_string(path)?;
        check_placeholders(path, &source)?;
        Self::from_source(&source)
    }

    /// Build a renderer from template text
    ///
    /// A single trailing newline of the template is not part of the output.
    pub fn from_source(source: &str) -> Result<Self, TemplateError> {
        let source = source
            .strip_suffix("\r\n")
            .or_else(|| source.strip_suffix('\n'))
            .unwrap_or(source);
        let mut tera = Tera::default();

        // Title and content are inserted verbatim, content is already HTML
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, source)?;

        Ok(Self { tera })
    }

    /// Render a page to a string
    pub fn render(&self, title: &str, content: &str) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("content", content);
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Render a page and write it to `output_path`, replacing any existing file
    pub fn render_to_file(
        &self,
        page: &PageContent,
        output_path: &Path,
    ) -> Result<(), TemplateError> {
        let html = self.render(&page.title, &page.body)?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, html)?;

        Ok(())
    }
}

/// Make sure every placeholder appears in an expression of the template
fn check_placeholders(path: &Path, source: &str) -> Result<(), TemplateError> {
    for placeholder in PLACEHOLDERS {
        let pattern = format!(r"\{{\{{-?\s*{}\b", regex::escape(placeholder));
        let re = Regex::new(&pattern)?;
        if !re.is_match(source) {
            return Err(TemplateError::MissingPlaceholder {
                path: path.to_path_buf(),
                placeholder: placeholder.to_string(),
            });
        }
    }
    Ok(())
}
