//! Feed (RSS/Atom) generation configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Output path for the feed file, relative to the output directory.
    pub path: PathBuf,
    /// Feed format: rss | atom.
    pub format: FeedFormat,
    /// Use the post excerpt when a post has no description.
    pub excerpt: bool,
    /// Maximum number of entries (newest first).
    pub limit: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".into(),
            format: FeedFormat::Rss,
            excerpt: true,
            limit: None,
        }
    }
}

impl FeedConfig {
    pub const ENABLE: FieldPath = FieldPath::new("site.feed.enable");
    pub const PATH: FieldPath = FieldPath::new("site.feed.path");
    pub const LIMIT: FieldPath = FieldPath::new("site.feed.limit");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.path.as_os_str().is_empty() || self.path.is_absolute() {
            diag.error_with_hint(
                Self::PATH,
                format!("invalid feed path `{}`", self.path.display()),
                "use a path relative to the output directory, e.g. \"rss.xml\"",
            );
        }

        if self.limit == Some(0) {
            diag.warn(Self::LIMIT, "limit is 0, the feed will have no entries");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.site.feed.enable);
        assert!(config.site.feed.excerpt);
        assert_eq!(config.site.feed.path, PathBuf::from("rss.xml"));
        assert_eq!(config.site.feed.format, FeedFormat::Rss);
        assert_eq!(config.site.feed.limit, None);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[site.feed]\nenable = true\npath = \"atom.xml\"\nformat = \"atom\"\nexcerpt = false\nlimit = 10",
        );
        assert!(config.site.feed.enable);
        assert!(!config.site.feed.excerpt);
        assert_eq!(config.site.feed.path, PathBuf::from("atom.xml"));
        assert_eq!(config.site.feed.format, FeedFormat::Atom);
        assert_eq!(config.site.feed.limit, Some(10));
    }

    #[test]
    fn test_validate_path() {
        let mut diag = ConfigDiagnostics::new();
        let feed = FeedConfig {
            path: PathBuf::new(),
            ..FeedConfig::default()
        };
        feed.validate(&mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        let feed = FeedConfig {
            enable: false,
            path: PathBuf::new(),
            ..FeedConfig::default()
        };
        feed.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_zero_limit_warns() {
        let mut diag = ConfigDiagnostics::new();
        let feed = FeedConfig {
            limit: Some(0),
            ..FeedConfig::default()
        };
        feed.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
