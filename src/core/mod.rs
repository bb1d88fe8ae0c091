//! Core types shared across the descriptor.

mod url;

pub use url::UrlPath;
