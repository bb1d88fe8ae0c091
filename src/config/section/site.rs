//! `[site]` configuration.
//!
//! Basic site identity: title, description, canonical origin, and the URL
//! path the site is served under.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;
use crate::core::UrlPath;

/// Site identity and addressing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title shown in the browser tab and navigation masthead.
    pub title: String,

    /// Site description, emitted as SEO metadata.
    pub description: String,

    /// Canonical site origin (e.g., "https://example.github.io").
    pub url: Option<String>,

    /// URL path the site is served under (e.g., "/docs").
    /// Derived from the path component of `url` when unset.
    pub base_path: Option<UrlPath>,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en")]
    pub language: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            base_path: None,
            language: "en".into(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` and `description` must be set
    /// - `url` must be set and a valid absolute http(s) URL with a host
    /// - `base_path`, when set alongside a `url` that carries a path
    ///   component, must agree with it
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "required field is missing or empty");
        }
        if self.description.is_empty() {
            diag.error(Self::FIELDS.description, "required field is missing or empty");
        }

        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                Self::FIELDS.url,
                "required field is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        };

        // Strict URL format check using the url crate
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
                return;
            }
        }

        // url path and explicit base_path must agree
        if let Some(base) = &self.base_path
            && let Some(url_path) = extract_url_path(url_str)
            && !url_path.is_empty()
            && *base != UrlPath::from_prefix(&url_path)
        {
            diag.error_with_hint(
                Self::FIELDS.base_path,
                format!(
                    "'{}' disagrees with the path component of {} ('/{}')",
                    base,
                    Self::FIELDS.url,
                    url_path
                ),
                "drop base_path to derive it from the url, or make them match",
            );
        }
    }

    /// The base path every generated href is prefixed with.
    ///
    /// Falls back to `/` when unset (site served at the origin root).
    pub fn prefix(&self) -> UrlPath {
        self.base_path.clone().unwrap_or_default()
    }
}
