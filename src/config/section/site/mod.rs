//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Blog"
//! description = "Notes on engineering and life"
//! author = "Alice"
//! url = "https://example.com"
//! language = "en-GB"
//!
//! [site.feed]
//! enable = true
//! path = "rss.xml"
//! format = "rss"
//! ```

mod feed;
mod info;

pub use feed::{FeedConfig, FeedFormat};
pub use info::SiteInfoConfig;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Site section configuration containing info and feed settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, etc.)
    pub info: SiteInfoConfig,

    /// Feed generation settings (RSS/Atom).
    pub feed: FeedConfig,
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(self.feed.enable, diag);
        self.feed.validate(diag);
    }
}
