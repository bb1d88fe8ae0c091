//! `[head]` configuration - stylesheets and custom head tags.
//!
//! Custom tags are a tagged union discriminated by `tag`, one case per
//! emittable tag kind. Sequence order is preserved verbatim in the rendered
//! document, so a theme-forcing inline script stays ahead of later tags.
//!
//! ```toml
//! [head]
//! styles = ["styles/custom.css"]
//!
//! [[head.tags]]
//! tag = "script"
//! content = "localStorage.setItem('theme', 'dark');"
//!
//! [[head.tags]]
//! tag = "meta"
//! attrs = { name = "robots", content = "index, follow" }
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::brand::check_asset_exists;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Attribute map for an emitted tag. Preserves author order; values must
/// be TOML scalars.
pub type TagAttrs = toml::map::Map<String, toml::Value>;

/// Custom `<head>` content: stylesheets and extra tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "head")]
pub struct HeadConfig {
    /// Stylesheet paths (relative to project root), emitted in order.
    pub styles: Vec<PathBuf>,

    /// Extra head tags, emitted verbatim in sequence order.
    #[config(hidden)]
    pub tags: Vec<HeadTag>,
}

impl HeadConfig {
    /// Validate stylesheet existence and tag well-formedness.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        for style in &self.styles {
            check_asset_exists(style, root, Self::FIELDS.styles, diag);
        }

        for (index, tag) in self.tags.iter().enumerate() {
            tag.validate(index, Self::FIELDS.tags, diag);
        }
    }
}

// ============================================================================
// Head Tag
// ============================================================================

/// One emittable `<head>` tag.
///
/// Each case carries only what its kind can render: `meta` and `link` are
/// void tags (attributes only), `script` additionally carries literal text
/// content that is emitted unescaped (raw text per the HTML spec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadTag {
    /// Inline `<script>` with literal content.
    // content precedes attrs so TOML serialization emits the scalar first
    Script {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "TagAttrs::is_empty")]
        attrs: TagAttrs,
    },
    /// `<meta>` tag, attributes only.
    Meta {
        #[serde(default)]
        attrs: TagAttrs,
    },
    /// `<link>` tag, attributes only.
    Link {
        #[serde(default)]
        attrs: TagAttrs,
    },
}

impl HeadTag {
    /// Tag name as rendered.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Script { .. } => "script",
            Self::Meta { .. } => "meta",
            Self::Link { .. } => "link",
        }
    }

    /// Attribute map for this tag.
    pub const fn attrs(&self) -> &TagAttrs {
        match self {
            Self::Script { attrs, .. } | Self::Meta { attrs } | Self::Link { attrs } => attrs,
        }
    }

    /// Validate one tag entry.
    ///
    /// # Checks
    /// - Attribute values are TOML scalars (no nested arrays/tables)
    /// - `meta`/`link` carry at least one attribute
    /// - `script` carries content or a `src` attribute
    fn validate(&self, index: usize, field: FieldPath, diag: &mut ConfigDiagnostics) {
        for (name, value) in self.attrs() {
            if value.is_array() || value.is_table() {
                diag.error(
                    field,
                    format!(
                        "entry {}: attribute '{}' must be a scalar value",
                        index, name
                    ),
                );
            }
        }

        match self {
            Self::Script { attrs, content } => {
                if content.is_empty() && !attrs.contains_key("src") {
                    diag.error(
                        field,
                        format!("entry {}: script needs content or a 'src' attribute", index),
                    );
                }
            }
            Self::Meta { attrs } | Self::Link { attrs } => {
                if attrs.is_empty() {
                    diag.error(
                        field,
                        format!("entry {}: {} tag has no attributes", index, self.name()),
                    );
                }
            }
        }
    }
}
