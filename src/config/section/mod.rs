//! Configuration section definitions.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Networking Tools"
//! description = "Docs for the networking lab"
//! url = "https://example.github.io"
//! base_path = "/networking-tools"
//!
//! [brand]
//! logo = { path = "assets/logo.svg", alt = "Networking Tools" }
//! favicons = [{ path = "assets/favicon.ico" }]
//!
//! [head]
//! styles = ["styles/custom.css"]
//!
//! [[head.tags]]
//! tag = "meta"
//! attrs = { property = "og:type", content = "website" }
//!
//! [[social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/example/repo"
//!
//! [[sidebar]]
//! label = "Tools"
//! directory = "tools"
//! ```

mod brand;
mod head;
mod sidebar;
mod site;
mod social;

pub use brand::{BrandConfig, FaviconEntry, LogoConfig};
pub use head::{HeadConfig, HeadTag, TagAttrs};
pub use sidebar::{SIDEBAR_FIELD, SidebarGroup, validate_sidebar};
pub use site::SiteSectionConfig;
pub use social::{SOCIAL_FIELD, SocialLink, validate_social};
