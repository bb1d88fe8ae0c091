//! `[[social]]` configuration - social profile links.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field path for social link diagnostics.
pub const SOCIAL_FIELD: FieldPath = FieldPath::new("social");

/// A single social profile link.
///
/// ```toml
/// [[social]]
/// icon = "github"
/// label = "GitHub"
/// href = "https://github.com/example/repo"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform identifier the framework maps to an icon.
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Target profile URL.
    pub href: String,
}

/// Validate social links: labels present, hrefs absolute http(s) URLs.
pub fn validate_social(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    for link in links {
        if link.label.is_empty() {
            diag.error(
                SOCIAL_FIELD,
                format!("link '{}' has no label", link.href),
            );
        }

        match url::Url::parse(&link.href) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => diag.error(
                SOCIAL_FIELD,
                format!(
                    "link '{}': scheme '{}' not supported",
                    link.label,
                    parsed.scheme()
                ),
            ),
            Err(e) => diag.error(
                SOCIAL_FIELD,
                format!("link '{}': invalid URL: {}", link.label, e),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_social_parsed_in_order() {
        let config = test_parse_config(
            r#"[[social]]
icon = "github"
label = "GitHub"
href = "https://github.com/example/repo"

[[social]]
icon = "mastodon"
label = "Mastodon"
href = "https://hachyderm.io/@example"
"#,
        );
        assert_eq!(config.social.len(), 2);
        assert_eq!(config.social[0].icon, "github");
        assert_eq!(config.social[1].label, "Mastodon");
    }

    #[test]
    fn test_valid_links_pass() {
        let links = vec![SocialLink {
            icon: "github".into(),
            label: "GitHub".into(),
            href: "https://github.com/example".into(),
        }];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_invalid_href_rejected() {
        let links = vec![SocialLink {
            icon: "github".into(),
            label: "GitHub".into(),
            href: "github.com/example".into(),
        }];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_missing_label_rejected() {
        let links = vec![SocialLink {
            icon: "github".into(),
            label: String::new(),
            href: "https://github.com/example".into(),
        }];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&links, &mut diag);
        assert!(diag.has_errors());
    }
}
