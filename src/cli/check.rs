//! Check command - validation summary.
//!
//! By the time this runs, `SiteConfig::load` has already collected and
//! reported any diagnostics; this prints what the valid descriptor declares.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::utils::plural_s;
use crate::{debug, log};

/// Print a summary of the validated descriptor.
pub fn run(config: &SiteConfig) -> Result<()> {
    log!("check"; "{}: {}", config.site.title.bold(), config.site.description);

    if let Some(prefix) = config.absolute_prefix() {
        log!("check"; "served at {}", prefix.as_str().cyan());
    }

    let styles = config.head.styles.len();
    let tags = config.head.tags.len();
    let social = config.social.len();
    let groups = config.sidebar.len();
    log!(
        "check";
        "{styles} stylesheet{}, {tags} head tag{}, {social} social link{}, {groups} sidebar group{}",
        plural_s(styles),
        plural_s(tags),
        plural_s(social),
        plural_s(groups)
    );

    for group in &config.sidebar {
        debug!("check"; "sidebar group '{}'", group.label());
    }

    log!("check"; "{}", "all checks passed".green());
    Ok(())
}
