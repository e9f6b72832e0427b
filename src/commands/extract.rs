//! Extract localizable strings from the app sources
//!
//! A string literal is localizable when it is followed by the configured
//! marker, `"Hello".sccs_loc`. Every such literal is listed in strings-table
//! format, reusing the existing translation line when the table has one.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::Project;

/// Print (or write to `output`) the updated strings table
pub fn run(project: &Project, output: Option<&Path>) -> Result<()> {
    let strings = &project.config.strings;
    let pattern = marker_pattern(&strings.marker)?;

    // Only the configured patterns are globs, the base directory is literal
    let base = glob::Pattern::escape(&project.base_dir.to_string_lossy());

    let mut found = HashSet::new();
    let mut scanned = 0;
    for source in &strings.sources {
        let pattern_path = Path::new(&base).join(source);
        let pattern_str = pattern_path.to_string_lossy();
        for entry in glob::glob(&pattern_str)
            .with_context(|| format!("Invalid source pattern {:?}", source))?
        {
            let path = entry?;
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            collect_strings(&pattern, &text, &mut found);
            scanned += 1;
        }
    }
    tracing::info!(
        "Found {} localizable strings in {} files",
        found.len(),
        scanned
    );

    let table_path = project.base_dir.join(&strings.table);
    let existing = if table_path.is_file() {
        parse_table(&fs::read_to_string(&table_path)?)
    } else {
        tracing::warn!("Strings table {:?} not found, starting empty", table_path);
        HashMap::new()
    };

    let lines = merge(&found, &existing);
    let known = found.iter().filter(|s| existing.contains_key(*s)).count();
    tracing::info!("{} already translated, {} new", known, found.len() - known);

    let rendered: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Regex matching a marked literal; group 1 is the string
pub fn marker_pattern(marker: &str) -> Result<Regex> {
    let pattern = format!(r#""([^"]+?)"\.{}"#, regex::escape(marker));
    Ok(Regex::new(&pattern)?)
}

/// Add every marked literal in `text` to `into`
pub fn collect_strings(pattern: &Regex, text: &str, into: &mut HashSet<String>) {
    for caps in pattern.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            into.insert(m.as_str().to_string());
        }
    }
}

/// Parse a strings table into key -> full line
///
/// Lines that do not split into exactly two parts on `" = "` are ignored.
pub fn parse_table(content: &str) -> HashMap<String, String> {
    let mut table = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split("\" = \"").collect();
        if let [key, _] = parts.as_slice() {
            // Drop the opening quote
            let mut chars = key.chars();
            chars.next();
            table.insert(chars.as_str().to_string(), line.to_string());
        }
    }

    table
}

/// Table lines for `found`, sorted case-insensitively
pub fn merge(found: &HashSet<String>, existing: &HashMap<String, String>) -> Vec<String> {
    let mut strings: Vec<&String> = found.iter().collect();
    strings.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    strings
        .into_iter()
        .map(|s| match existing.get(s) {
            Some(line) => line.clone(),
            None => format!("\"{}\" = \"{}\";", s, s),
        })
        .collect()
}
