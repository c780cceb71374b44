//! Feed generation (RSS, Atom).
//!
//! Generates a syndication feed from loaded posts:
//!
//! - **RSS 2.0**: Standard feed format (`rss.xml`)
//! - **Atom 1.0**: Modern feed format (`atom.xml`)

use crate::config::{FeedFormat, SiteConfig};
use crate::{log, post::Post};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

pub mod atom;
mod common;
pub mod rss;

pub use common::{FeedEntry, absolute_link, collect_entries};

/// Render the feed in the configured format.
pub fn render_feed(posts: &[Post], config: &SiteConfig) -> Result<String> {
    match config.site.feed.format {
        FeedFormat::Rss => rss::render_rss(posts, config),
        FeedFormat::Atom => atom::render_atom(posts, config),
    }
}

/// Build feed if enabled in config.
///
/// Returns the written path.
pub fn build_feed(posts: &[Post], config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.site.feed.enable {
        return Ok(None);
    }

    let xml = render_feed(posts, config)?;
    let feed_path = config.feed_output_path();

    if let Some(parent) = feed_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&feed_path, xml)
        .with_context(|| format!("failed to write {}", feed_path.display()))?;

    let module = match config.site.feed.format {
        FeedFormat::Rss => "rss",
        FeedFormat::Atom => "atom",
    };
    log!(module; "{}", config.root_relative(&feed_path).display());
    Ok(Some(feed_path))
}

#[cfg(test)]
mod tests {
    use super::common::test_helpers::{make_config, make_post};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_feed_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().join("dist");

        let posts = vec![make_post("Hello", Some("2024-01-01"), "", "Hi.")];
        let path = build_feed(&posts, &config).unwrap().unwrap();
        assert_eq!(path, dir.path().join("dist/rss.xml"));

        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<rss"));
        assert!(xml.contains("https://example.com/blog/hello"));
    }

    #[test]
    fn test_build_feed_atom_nested_path() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().to_path_buf();
        config.site.feed.format = FeedFormat::Atom;
        config.site.feed.path = "feeds/atom.xml".into();

        let path = build_feed(&[], &config).unwrap().unwrap();
        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<feed"));
    }

    #[test]
    fn test_build_feed_disabled() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().join("dist");
        config.site.feed.enable = false;

        assert!(build_feed(&[], &config).unwrap().is_none());
        assert!(!dir.path().join("dist").exists());
    }
}
