//! `[[sidebar]]` configuration - navigation groups.
//!
//! Each group is either auto-populated from a content directory or an
//! explicit external link:
//!
//! ```toml
//! [[sidebar]]
//! label = "Tools"
//! directory = "tools"
//!
//! [[sidebar]]
//! label = "About the Author"
//! link = "https://example.dev/about/"
//! attrs = { target = "_blank", rel = "noopener" }
//! ```
//!
//! Page discovery inside a `directory` group is the site framework's job;
//! only the reference itself is validated here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::head::TagAttrs;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Field path for sidebar diagnostics.
pub const SIDEBAR_FIELD: FieldPath = FieldPath::new("sidebar");

/// A single navigation group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarGroup {
    /// Auto-generated group: entries come from pages under `directory`.
    Directory { label: String, directory: PathBuf },
    /// Explicit external link with optional anchor attributes.
    Link {
        label: String,
        link: String,
        #[serde(default, skip_serializing_if = "TagAttrs::is_empty")]
        attrs: TagAttrs,
    },
}

impl SidebarGroup {
    /// Group label shown in the navigation.
    pub fn label(&self) -> &str {
        match self {
            Self::Directory { label, .. } | Self::Link { label, .. } => label,
        }
    }
}

/// Validate the sidebar sequence.
///
/// # Checks
/// - Labels are non-empty and unique (a duplicate is an error: ambiguous
///   navigation would otherwise render non-deterministically)
/// - `directory` groups point at existing directories under `content_dir`
/// - `link` groups carry valid absolute http(s) URLs and scalar attributes
pub fn validate_sidebar(
    groups: &[SidebarGroup],
    content_dir: &Path,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for group in groups {
        let label = group.label();
        if label.is_empty() {
            diag.error(SIDEBAR_FIELD, "group label must not be empty");
        } else if !seen.insert(label) {
            diag.error(
                SIDEBAR_FIELD,
                format!("duplicate group label '{}'", label),
            );
        }

        match group {
            SidebarGroup::Directory { label, directory } => {
                let abs = content_dir.join(directory);
                if !abs.is_dir() {
                    diag.error_with_hint(
                        SIDEBAR_FIELD,
                        format!(
                            "group '{}': content directory '{}' not found",
                            label,
                            directory.display()
                        ),
                        format!("expected directory at {}", abs.display()),
                    );
                }
            }
            SidebarGroup::Link { label, link, attrs } => {
                match url::Url::parse(link) {
                    Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                    Ok(parsed) => diag.error(
                        SIDEBAR_FIELD,
                        format!(
                            "group '{}': link scheme '{}' not supported",
                            label,
                            parsed.scheme()
                        ),
                    ),
                    Err(e) => diag.error(
                        SIDEBAR_FIELD,
                        format!("group '{}': invalid link: {}", label, e),
                    ),
                }

                for (name, value) in attrs {
                    if value.is_array() || value.is_table() {
                        diag.error(
                            SIDEBAR_FIELD,
                            format!(
                                "group '{}': attribute '{}' must be a scalar value",
                                label, name
                            ),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn content_with_dirs(dirs: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for dir in dirs {
            std::fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        temp
    }

    #[test]
    fn test_directory_group_parsed() {
        let config = test_parse_config("[[sidebar]]\nlabel = \"Tools\"\ndirectory = \"tools\"");
        assert_eq!(config.sidebar.len(), 1);
        match &config.sidebar[0] {
            SidebarGroup::Directory { label, directory } => {
                assert_eq!(label, "Tools");
                assert_eq!(directory, &PathBuf::from("tools"));
            }
            SidebarGroup::Link { .. } => panic!("expected directory group"),
        }
    }

    #[test]
    fn test_link_group_parsed() {
        let config = test_parse_config(
            r#"[[sidebar]]
label = "About the Author"
link = "https://example.dev/about/"
attrs = { target = "_blank", rel = "noopener" }
"#,
        );
        match &config.sidebar[0] {
            SidebarGroup::Link { label, link, attrs } => {
                assert_eq!(label, "About the Author");
                assert_eq!(link, "https://example.dev/about/");
                assert_eq!(attrs.get("target").and_then(|v| v.as_str()), Some("_blank"));
            }
            SidebarGroup::Directory { .. } => panic!("expected link group"),
        }
    }

    #[test]
    fn test_group_order_preserved() {
        let config = test_parse_config(
            r#"[[sidebar]]
label = "Tools"
directory = "tools"

[[sidebar]]
label = "Guides"
directory = "guides"
"#,
        );
        let labels: Vec<_> = config.sidebar.iter().map(|g| g.label()).collect();
        assert_eq!(labels, ["Tools", "Guides"]);
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let content = content_with_dirs(&["tools"]);
        let groups = vec![
            SidebarGroup::Directory {
                label: "Tools".into(),
                directory: "tools".into(),
            },
            SidebarGroup::Directory {
                label: "Tools".into(),
                directory: "tools".into(),
            },
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, content.path(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate"));
    }

    #[test]
    fn test_missing_directory_rejected() {
        let content = content_with_dirs(&[]);
        let groups = vec![SidebarGroup::Directory {
            label: "Tools".into(),
            directory: "tools".into(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, content.path(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("tools"));
    }

    #[test]
    fn test_invalid_link_rejected() {
        let content = content_with_dirs(&[]);
        let groups = vec![SidebarGroup::Link {
            label: "About".into(),
            link: "not-a-url".into(),
            attrs: TagAttrs::new(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, content.path(), &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_valid_groups_pass() {
        let content = content_with_dirs(&["tools", "guides"]);
        let groups = vec![
            SidebarGroup::Directory {
                label: "Tools".into(),
                directory: "tools".into(),
            },
            SidebarGroup::Directory {
                label: "Guides".into(),
                directory: "guides".into(),
            },
            SidebarGroup::Link {
                label: "About".into(),
                link: "https://example.dev/about/".into(),
                attrs: TagAttrs::new(),
            },
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, content.path(), &mut diag);
        assert!(!diag.has_errors(), "{:?}", diag.errors());
    }

    #[test]
    fn test_empty_label_rejected() {
        let content = content_with_dirs(&["tools"]);
        let groups = vec![SidebarGroup::Directory {
            label: String::new(),
            directory: "tools".into(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, content.path(), &mut diag);
        assert!(diag.has_errors());
    }
}
