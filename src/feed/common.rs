//! Feed entries shared by the RSS and Atom writers.

use rayon::prelude::*;
use serde::Serialize;

use crate::{config::SiteConfig, log, permalink::build_url, post::Post, utils::date::PostDate};

/// A post validated for feed inclusion (requires a date).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub title: String,
    pub pub_date: PostDate,
    pub description: String,
    pub link: String,
    pub categories: Vec<String>,
}

impl FeedEntry {
    /// Build an entry, or `None` when the post has no date.
    pub fn from_post(post: &Post, config: &SiteConfig) -> Option<Self> {
        let pub_date = post.date()?;

        let description = match post.meta.description() {
            Some(description) => description.to_string(),
            None if config.site.feed.excerpt => post.excerpt(),
            None => String::new(),
        };

        Some(Self {
            title: post.title().to_string(),
            pub_date,
            description,
            link: absolute_link(config, &build_url(post.title(), post.categories())),
            categories: post.categories().iter().map(str::to_string).collect(),
        })
    }
}

/// `base_url` + site-relative path.
pub fn absolute_link(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.site.info.base_url(), path)
}

/// Feed entries for `posts`, newest first, capped by `site.feed.limit`.
pub fn collect_entries(posts: &[Post], config: &SiteConfig) -> Vec<FeedEntry> {
    let mut entries: Vec<FeedEntry> = posts
        .par_iter()
        .filter_map(|post| FeedEntry::from_post(post, config))
        .collect();

    let excluded = posts.len() - entries.len();
    if excluded > 0 {
        log!("feed"; "excluded {} posts without date (only posts with date are included)", excluded);
    }

    entries.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then_with(|| a.link.cmp(&b.link)));

    if let Some(limit) = config.site.feed.limit {
        entries.truncate(limit);
    }
    entries
}

/// Date of the newest entry.
pub fn latest_date(entries: &[FeedEntry]) -> Option<PostDate> {
    entries.iter().map(|entry| entry.pub_date).max()
}
