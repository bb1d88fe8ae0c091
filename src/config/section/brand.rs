//! `[brand]` configuration - logo and favicon assets.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site branding assets. All paths are relative to the project root and
/// must exist on disk at validation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "brand")]
pub struct BrandConfig {
    /// Site logo with alternative text.
    #[config(hidden)]
    pub logo: Option<LogoConfig>,

    /// Favicon set. Entries may carry `sizes` and `type` attributes for
    /// sized icon references.
    #[config(hidden)]
    pub favicons: Vec<FaviconEntry>,
}

/// Logo file reference plus alt text for accessibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub path: PathBuf,
    pub alt: String,
}

/// A single favicon `<link>` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconEntry {
    pub path: PathBuf,
    /// Icon dimensions (e.g., "32x32"), emitted as the `sizes` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// MIME type override; detected from the file extension when unset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Link relation, `icon` unless overridden (e.g., "apple-touch-icon").
    pub rel: String,
}

impl Default for FaviconEntry {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            sizes: None,
            mime: None,
            rel: "icon".into(),
        }
    }
}

impl FaviconEntry {
    /// MIME type for this entry, detected from the extension when not set.
    pub fn mime_type(&self) -> &str {
        match &self.mime {
            Some(mime) => mime,
            None => crate::utils::mime::for_icon(&self.path),
        }
    }
}

impl BrandConfig {
    /// Validate that every referenced asset exists under the project root.
    ///
    /// A missing asset is fatal and the diagnostic names the unresolved path.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            check_asset_exists(&logo.path, root, Self::FIELDS.logo, diag);
        }

        for favicon in &self.favicons {
            check_asset_exists(&favicon.path, root, Self::FIELDS.favicons, diag);
        }
    }
}

/// Report an error if `path` does not resolve to a file under `root`.
pub(crate) fn check_asset_exists(
    path: &Path,
    root: &Path,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if path.as_os_str().is_empty() {
        diag.error(field, "asset path must not be empty");
        return;
    }

    let normalized = path.strip_prefix("./").unwrap_or(path);
    let abs_path = root.join(normalized);
    if !abs_path.is_file() {
        diag.error_with_hint(
            field,
            format!("asset '{}' not found on disk", path.display()),
            format!("expected file at {}", abs_path.display()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.brand.logo.is_none());
        assert!(config.brand.favicons.is_empty());
    }

    #[test]
    fn test_logo_parsed() {
        let config = test_parse_config(
            "[brand]\nlogo = { path = \"assets/logo-dark.svg\", alt = \"Networking Tools\" }",
        );
        let logo = config.brand.logo.unwrap();
        assert_eq!(logo.path, PathBuf::from("assets/logo-dark.svg"));
        assert_eq!(logo.alt, "Networking Tools");
    }

    #[test]
    fn test_favicon_entries() {
        let config = test_parse_config(
            r#"[brand]
favicons = [
    { path = "assets/favicon.ico" },
    { path = "assets/icon-32.png", sizes = "32x32", type = "image/png" },
]"#,
        );
        assert_eq!(config.brand.favicons.len(), 2);
        assert_eq!(config.brand.favicons[0].rel, "icon");
        assert_eq!(config.brand.favicons[0].mime_type(), "image/x-icon");
        assert_eq!(config.brand.favicons[1].sizes.as_deref(), Some("32x32"));
        assert_eq!(config.brand.favicons[1].mime_type(), "image/png");
    }

    #[test]
    fn test_missing_logo_fails_naming_path() {
        let temp = TempDir::new().unwrap();
        let brand = BrandConfig {
            logo: Some(LogoConfig {
                path: PathBuf::from("assets/logo.svg"),
                alt: String::new(),
            }),
            favicons: Vec::new(),
        };

        let mut diag = ConfigDiagnostics::new();
        brand.validate(temp.path(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("assets/logo.svg"));
    }

    #[test]
    fn test_existing_assets_pass() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("assets")).unwrap();
        std::fs::write(temp.path().join("assets/logo.svg"), "<svg/>").unwrap();
        std::fs::write(temp.path().join("assets/favicon.ico"), [0u8; 4]).unwrap();

        let brand = BrandConfig {
            logo: Some(LogoConfig {
                path: PathBuf::from("assets/logo.svg"),
                alt: "logo".into(),
            }),
            favicons: vec![FaviconEntry {
                path: PathBuf::from("./assets/favicon.ico"),
                ..Default::default()
            }],
        };

        let mut diag = ConfigDiagnostics::new();
        brand.validate(temp.path(), &mut diag);
        assert!(!diag.has_errors(), "{:?}", diag.errors());
    }
}
