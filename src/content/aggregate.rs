//! Aggregation - assembles the fragments of one content spec into a page

use anyhow::Result;

use super::{ContentLoader, ContentSpec, Fragment, LanguageDirectory, Resolver};

/// Assembled content of one (spec, language) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Filename below the language's output directory
    pub output_name: String,
    /// First non-empty fragment title
    pub title: String,
    /// Fragment bodies separated by a blank line
    pub body: String,
}

impl PageContent {
    /// Fold fragments in order into a page
    ///
    /// Returns `None` when there are no fragments. The output name is
    /// `explicit_output` if given, the first fragment's otherwise.
    pub fn from_fragments<I>(explicit_output: Option<&str>, fragments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Fragment>,
    {
        let page = fragments
            .into_iter()
            .fold(None::<PageContent>, |page, fragment| match page {
                None => Some(PageContent {
                    output_name: fragment.output_name,
                    title: fragment.title,
                    body: fragment.body,
                }),
                Some(mut page) => {
                    if page.title.is_empty() {
                        page.title = fragment.title;
                    }
                    page.body.push_str("\n\n");
                    page.body.push_str(&fragment.body);
                    Some(page)
                }
            })?;

        Some(match explicit_output {
            Some(output) => PageContent {
                output_name: output.to_string(),
                ..page
            },
            None => page,
        })
    }
}

/// Resolve and load every file of `spec` for `language`, in order
///
/// Files missing everywhere are skipped; `Ok(None)` means none resolved.
pub fn aggregate(
    resolver: &Resolver,
    loader: &ContentLoader,
    language: &LanguageDirectory,
    spec: &ContentSpec,
) -> Result<Option<PageContent>> {
    let mut fragments = Vec::with_capacity(spec.files().len());
    for filename in spec.files() {
        let resolution = resolver.resolve(language, filename);
        if let Some(fragment) = loader.load_resolution(&resolution)? {
            fragments.push(fragment);
        }
    }

    Ok(PageContent::from_fragments(spec.explicit_output(), fragments))
}
