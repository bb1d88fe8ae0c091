//! Head fragment rendering.
//!
//! Turns the descriptor into the literal `<head>` markup the site framework
//! embeds in every page: title, description meta, favicon links, stylesheet
//! links, then every custom tag verbatim in sequence order.

use std::fmt::Write;

use crate::config::{HeadTag, SiteConfig, TagAttrs};
use crate::utils::html::{escape, escape_attr, is_void_element};

/// Render the full `<head>` fragment for the descriptor.
///
/// Emission order is fixed: title, description, favicons, stylesheets,
/// custom tags. Within `head.tags`, sequence order is preserved verbatim
/// (a theme-forcing script declared first runs before later tags load).
pub fn head_fragment(config: &SiteConfig) -> String {
    let mut out = String::new();

    if !config.site.title.is_empty() {
        let _ = writeln!(out, "<title>{}</title>", escape(&config.site.title));
    }

    if !config.site.description.is_empty() {
        let _ = writeln!(
            out,
            r#"<meta name="description" content="{}">"#,
            escape_attr(&config.site.description)
        );
    }

    for favicon in &config.brand.favicons {
        let mut line = format!(
            r#"<link rel="{}" href="{}" type="{}""#,
            escape_attr(&favicon.rel),
            escape_attr(&config.href_for(&favicon.path)),
            escape_attr(favicon.mime_type()),
        );
        if let Some(sizes) = &favicon.sizes {
            let _ = write!(line, r#" sizes="{}""#, escape_attr(sizes));
        }
        let _ = writeln!(out, "{}>", line);
    }

    for style in &config.head.styles {
        let _ = writeln!(
            out,
            r#"<link rel="stylesheet" href="{}">"#,
            escape_attr(&config.href_for(style))
        );
    }

    for tag in &config.head.tags {
        write_tag(&mut out, tag);
    }

    out
}

/// Render one custom tag.
fn write_tag(out: &mut String, tag: &HeadTag) {
    let name = tag.name();
    out.push('<');
    out.push_str(name);
    write_attrs(out, tag.attrs());
    out.push('>');

    if let HeadTag::Script { content, .. } = tag {
        // Script content is raw text per the HTML spec, emitted unescaped
        debug_assert!(!is_void_element(name));
        out.push_str(content);
        out.push_str("</script>");
    }

    out.push('\n');
}

/// Render an attribute map in author order.
///
/// `true` renders a bare boolean attribute, `false` omits it, other scalars
/// render as escaped `name="value"` pairs.
fn write_attrs(out: &mut String, attrs: &TagAttrs) {
    for (name, value) in attrs {
        match value {
            toml::Value::Boolean(true) => {
                let _ = write!(out, " {}", name);
            }
            toml::Value::Boolean(false) => {}
            toml::Value::String(s) => {
                let _ = write!(out, r#" {}="{}""#, name, escape_attr(s));
            }
            other => {
                let _ = write!(out, r#" {}="{}""#, name, escape_attr(&other.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_title_and_description() {
        let config = test_parse_config("");
        let head = head_fragment(&config);
        assert!(head.contains("<title>Test</title>"));
        assert!(head.contains(r#"<meta name="description" content="Test">"#));
    }

    #[test]
    fn test_title_escaped() {
        let mut config = test_parse_config("");
        config.site.title = "Tools & Guides".into();
        let head = head_fragment(&config);
        assert!(head.contains("<title>Tools &amp; Guides</title>"));
    }

    #[test]
    fn test_script_before_meta_in_document_order() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "script"
content = "X"

[[head.tags]]
tag = "meta"
attrs = { name = "robots", content = "index, follow" }
"#,
        );
        let head = head_fragment(&config);

        let script_pos = head.find("<script>X</script>").expect("script missing");
        let meta_pos = head
            .find(r#"<meta name="robots" content="index, follow">"#)
            .expect("meta missing");
        assert!(script_pos < meta_pos);
    }

    #[test]
    fn test_script_content_not_escaped() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "script"
content = "if (a < b) { x(); }"
"#,
        );
        let head = head_fragment(&config);
        assert!(head.contains("if (a < b) { x(); }"));
    }

    #[test]
    fn test_attrs_in_author_order() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "meta"
attrs = { property = "og:type", content = "website" }
"#,
        );
        let head = head_fragment(&config);
        assert!(head.contains(r#"<meta property="og:type" content="website">"#));
    }

    #[test]
    fn test_boolean_attrs() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "script"
attrs = { src = "/app.js", defer = true, nomodule = false }
"#,
        );
        let head = head_fragment(&config);
        assert!(head.contains(r#"<script src="/app.js" defer></script>"#));
        assert!(!head.contains("nomodule"));
    }

    #[test]
    fn test_styles_prefixed_with_base_path() {
        let config = test_parse_config(
            "url = \"https://example.com/docs\"\nbase_path = \"/docs\"\n[head]\nstyles = [\"styles/custom.css\"]",
        );
        let head = head_fragment(&config);
        assert!(head.contains(r#"<link rel="stylesheet" href="/docs/styles/custom.css">"#));
    }

    #[test]
    fn test_favicon_links() {
        let config = test_parse_config(
            r#"[brand]
favicons = [
    { path = "assets/favicon.ico" },
    { path = "assets/icon-32.png", sizes = "32x32" },
]"#,
        );
        let head = head_fragment(&config);
        assert!(head.contains(
            r#"<link rel="icon" href="/assets/favicon.ico" type="image/x-icon">"#
        ));
        assert!(head.contains(r#"sizes="32x32""#));
    }

    #[test]
    fn test_attr_value_escaped() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "meta"
attrs = { name = "author", content = "Tools \"R\" Us" }
"#,
        );
        let head = head_fragment(&config);
        assert!(head.contains(r#"content="Tools &quot;R&quot; Us""#));
    }
}
