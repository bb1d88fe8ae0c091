//! Site descriptor management for `masthead.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── brand      # [brand]
//! │   ├── head       # [head] and [[head.tags]]
//! │   ├── social     # [[social]]
//! │   └── sidebar    # [[sidebar]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[site]`      | Identity (title, description, url, base_path)  |
//! | `[brand]`     | Logo and favicon assets                        |
//! | `[head]`      | Stylesheets and custom head tags               |
//! | `[[social]]`  | Social profile links                           |
//! | `[[sidebar]]` | Navigation groups                              |

pub mod section;
pub mod types;
pub(crate) mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{
    BrandConfig, FaviconEntry, HeadConfig, HeadTag, LogoConfig, SidebarGroup, SiteSectionConfig,
    SocialLink, TagAttrs, validate_sidebar, validate_social,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    core::UrlPath,
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default content directory under the project root.
const DEFAULT_CONTENT_DIR: &str = "content";

// ============================================================================
// root configuration
// ============================================================================

/// Root descriptor structure representing masthead.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content directory the sidebar references resolve against (internal)
    #[serde(skip)]
    pub content_dir: PathBuf,

    /// Site identity (title, description, url, base_path)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Branding assets (logo, favicons)
    #[serde(default)]
    pub brand: BrandConfig,

    /// Custom head content (stylesheets, tags)
    #[serde(default)]
    pub head: HeadConfig,

    /// Social profile links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialLink>,

    /// Navigation groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarGroup>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            content_dir: PathBuf::new(),
            site: SiteSectionConfig::default(),
            brand: BrandConfig::default(),
            head: HeadConfig::default(),
            social: Vec::new(),
            sidebar: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load the descriptor based on CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'masthead init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name) } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize the descriptor after parsing: resolve paths and derive
    /// `base_path` from the url when unset.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.root = crate::utils::path::normalize_path(&root);
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        let content = cli
            .content
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));
        self.content_dir = crate::utils::path::normalize_path(&self.root.join(content));

        self.sync_base_path_from_url();
    }

    /// Derive `base_path` from the path component of `site.url`.
    ///
    /// Enables proper link prefixing for subdirectory deployments
    /// (e.g., GitHub Pages project sites) without repeating the path.
    fn sync_base_path_from_url(&mut self) {
        if self.site.base_path.is_none()
            && let Some(ref url) = self.site.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.site.base_path = Some(UrlPath::from_prefix(&path));
        }
    }

    /// Parse the descriptor from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load the descriptor from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the config is always at the site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // url prefixing
    // ========================================================================

    /// Absolute URL prefix every generated page lives under
    /// (`site.url` joined with `site.base_path`).
    pub fn absolute_prefix(&self) -> Option<url::Url> {
        let origin = url::Url::parse(self.site.url.as_deref()?).ok()?;
        origin.join(self.site.prefix().as_str()).ok()
    }

    /// Absolute URL for a site-internal page path.
    pub fn absolute_url(&self, page: &str) -> Option<url::Url> {
        self.absolute_prefix()?
            .join(page.trim_start_matches('/'))
            .ok()
    }

    /// Site-relative, base-path-prefixed href for a root-relative asset.
    pub fn href_for(&self, path: &Path) -> String {
        let rel = path.strip_prefix("./").unwrap_or(path);
        self.site
            .prefix()
            .join_asset(&rel.to_string_lossy())
            .to_encoded()
            .into_owned()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole descriptor.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.validate(&mut diag);
        self.brand.validate(&self.root, &mut diag);
        self.head.validate(&self.root, &mut diag);
        validate_social(&self.social, &mut diag);
        validate_sidebar(&self.sidebar, &self.content_dir, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
