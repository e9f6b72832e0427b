//! Initialize a new content project

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG: &str = r#"# lproj-content configuration

# Directory
source_dir: content
output_dir: App
template: content-templates/App.html

# Languages
default_language: en
language_suffix: lproj
output_keeps_suffix: true

# Pages, rendered in this order for every language.
# A bare name renders one file (.md becomes .html); a map merges several
# files into one page.
files:
  - Welcome.md
  - files: [Welcome.md, HowItWorks.md]
    output: WelcomeAndHowItWorks.html

# Localizable strings (`lproj-content extract`)
strings:
  sources:
    - Sources/*/*.swift
  marker: sccs_loc
  table: en.lproj/Localizable.strings
"#;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<meta name="viewport" content="width=device-width, initial-scale=1">
	<title>{{ title }}</title>
</head>
<body>
{{ content }}
</body>
</html>
"#;

const WELCOME: &str = r#"# Welcome

This page is rendered from `content/en.lproj/Welcome.md`.

Add a directory such as `de.lproj` next to `en.lproj` to translate it; any
file a translation lacks is taken from `en.lproj`.
"#;

const HOW_IT_WORKS: &str = r#"# How it Works

1. Write Markdown or HTML into `content/<language>.lproj/`
2. List the pages in `_config.yml`
3. Run `lproj-content build`
"#;

/// Initialize a new project in the given directory
pub fn init_project(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("File already exists: {:?}", config_path);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("content/en.lproj"))?;
    fs::create_dir_all(target_dir.join("content-templates"))?;

    fs::write(&config_path, CONFIG)?;
    fs::write(target_dir.join("content-templates/App.html"), TEMPLATE)?;
    fs::write(target_dir.join("content/en.lproj/Welcome.md"), WELCOME)?;
    fs::write(target_dir.join("content/en.lproj/HowItWorks.md"), HOW_IT_WORKS)?;

    Ok(())
}
