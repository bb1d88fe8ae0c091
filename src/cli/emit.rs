//! Emit command - JSON export of the validated descriptor.
//!
//! The exported structure is the single validated value the external site
//! framework consumes at build invocation.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::EmitArgs;
use crate::config::SiteConfig;
use crate::log;

/// Serialize the descriptor and write it to stdout or `--output`.
pub fn run(args: &EmitArgs, config: &SiteConfig) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("emit"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_emit_preserves_head_tag_order() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "script"
content = "X"

[[head.tags]]
tag = "meta"
attrs = { name = "robots", content = "index, follow" }
"#,
        );

        let json = serde_json::to_string(&config).unwrap();
        let script_pos = json.find(r#""tag":"script""#).unwrap();
        let meta_pos = json.find(r#""tag":"meta""#).unwrap();
        assert!(script_pos < meta_pos);
    }

    #[test]
    fn test_emit_preserves_attr_order() {
        let config = test_parse_config(
            r#"[[head.tags]]
tag = "meta"
attrs = { property = "og:type", content = "website" }
"#,
        );

        let json = serde_json::to_string(&config).unwrap();
        let property_pos = json.find(r#""property""#).unwrap();
        let content_pos = json.find(r#""content":"website""#).unwrap();
        assert!(property_pos < content_pos);
    }

    #[test]
    fn test_emit_lists_sidebar_groups_in_order() {
        let config = test_parse_config(
            r#"[[sidebar]]
label = "Tools"
directory = "tools"

[[sidebar]]
label = "Guides"
directory = "guides"
"#,
        );

        let json = serde_json::to_string(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let labels: Vec<_> = value["sidebar"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, ["Tools", "Guides"]);
    }

    #[test]
    fn test_emit_skips_internal_paths() {
        let config = test_parse_config("");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("config_path"));
        assert!(!json.contains("content_dir"));
    }
}
