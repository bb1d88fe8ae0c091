//! Site descriptor scaffolding.
//!
//! Creates masthead.toml, the content directory, and ignore files for
//! new sites.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{BrandConfig, HeadConfig, SiteConfig, SiteSectionConfig};
use crate::log;

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Commented examples for the sections the derive template cannot express
/// (array-of-tables and nested tables).
const EXAMPLE_SECTIONS: &str = r#"# Branding assets, resolved relative to the project root:
# logo = { path = "assets/logo.svg", alt = "My Docs" }
# favicons = [
#     { path = "assets/favicon.ico" },
#     { path = "assets/icon-32.png", sizes = "32x32", type = "image/png" },
# ]

# Extra head tags, emitted in order:
# [[head.tags]]
# tag = "script"
# content = "localStorage.setItem('theme', 'dark');"
#
# [[head.tags]]
# tag = "meta"
# attrs = { property = "og:type", content = "website" }

# Social profile links:
# [[social]]
# icon = "github"
# label = "GitHub"
# href = "https://github.com/example/repo"

# Navigation groups, auto-populated from content directories
# or explicit external links:
# [[sidebar]]
# label = "Guides"
# directory = "guides"
#
# [[sidebar]]
# label = "About"
# link = "https://example.dev/about/"
# attrs = { target = "_blank", rel = "noopener" }
"#;

/// Generate masthead.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Masthead site descriptor (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/masthead-rs/masthead\n\n");

    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    out.push_str(&BrandConfig::template_with_header());
    out.push('\n');

    out.push_str(&HeadConfig::template_with_header());
    out.push('\n');

    out.push_str(EXAMPLE_SECTIONS);

    out
}

/// Create a new site: descriptor, content directory, and ignore files.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if config.config_path.exists() {
        bail!(
            "'{}' already exists, refusing to overwrite",
            config.config_path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create site directory '{}'", root.display()))?;

    write_config(&config.config_path)?;
    fs::create_dir_all(config.content_dir.as_path()).with_context(|| {
        format!(
            "Failed to create content directory '{}'",
            config.content_dir.display()
        )
    })?;
    write_ignore_files(root)?;

    log!("init"; "created {}", config.config_path.display());
    log!("init"; "fill in [site] and run 'masthead check'");
    Ok(())
}

/// Write the default masthead.toml
fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Only creates files that don't already exist (never overwrites the
/// user's ignore files).
fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_contains_sections() {
        let template = generate_config_template();
        assert!(template.contains("[site]"));
        assert!(template.contains("[brand]"));
        assert!(template.contains("[head]"));
        assert!(template.contains("language = \"en\""));
        assert!(template.contains("# [[sidebar]]"));
    }

    #[test]
    fn test_template_is_parseable() {
        // The scaffold must round-trip through the parser without
        // unknown-field warnings
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.site.language, "en");
        assert!(config.head.tags.is_empty());
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("masthead.toml");
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[site]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
