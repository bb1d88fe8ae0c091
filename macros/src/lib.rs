//! Proc macros for masthead.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteSectionConfig {
//!     /// Site title shown in the browser tab.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (inferred from the
//!   struct name when absent: `SiteSectionConfig` → `site`)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip entirely (no FIELDS entry, no template line)
//! - `#[config(hidden)]` - Keep the FIELDS entry but omit from the template
//! - `#[config(sub)]` - Nested Config struct, template emitted recursively
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in the template
//! - `#[config(inline_doc = "x")]` - Trailing comment on the template line

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
