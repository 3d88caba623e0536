//! Latest toolchain version lookup.
//!
//! - [`source`] - The [`VersionSource`] seam and its implementations
//! - [`scrape`] - Pulling a version out of download-page HTML

pub mod scrape;
pub mod source;

pub use scrape::extract_version;
pub use source::{DownloadPageSource, StaticSource, VersionSource};
