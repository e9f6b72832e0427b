//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Markdown to HTML renderer
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(
            Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH,
        )
    }

    /// Create with a custom set of parser extensions
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);

        html_output
    }

    /// Title of a markdown document: its first line, verbatim
    pub fn title(markdown: &str) -> &str {
        markdown.split('\n').next().unwrap_or_default()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
