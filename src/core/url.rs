//! URL path type for type-safe base-path and asset href handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: encode on output via `to_encoded()`

use std::borrow::Cow;
use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters that must be percent-encoded inside an href path.
const HREF_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?');

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Prefix paths end with `/`, asset hrefs may not
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a prefix path (with trailing slash). Normalizes leading and
    /// trailing slashes, strips query string and fragment.
    pub fn from_prefix(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Create an asset href (no trailing slash normalization).
    pub fn from_asset(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() {
            return Self(Arc::from("/"));
        }

        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };

        Self(Arc::from(normalized))
    }

    /// Join a root-relative asset path onto this prefix.
    ///
    /// `/docs/` + `styles/custom.css` -> `/docs/styles/custom.css`
    pub fn join_asset(&self, rel: &str) -> Self {
        let base = self.0.trim_end_matches('/');
        Self::from_asset(&format!("{}/{}", base, rel.trim_start_matches('/')))
    }

    /// Strip query string and fragment from a path.
    fn strip_query_fragment(path: &str) -> String {
        path.split(['?', '#']).next().unwrap_or(path).to_string()
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browser output (percent-encode href-unsafe characters).
    pub fn to_encoded(&self) -> Cow<'_, str> {
        utf8_percent_encode(&self.0, HREF_UNSAFE).into()
    }

    /// Check if the URL path is empty (only contains `/`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty() || self.0.as_ref() == "/"
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_prefix("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_prefix(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_prefix(&s))
    }
}
