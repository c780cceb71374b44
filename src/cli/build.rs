//! Build command: feed and redirect pages.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::config::SiteConfig;
use crate::feed::build_feed;
use crate::post::{Post, load_posts};
use crate::redirect::{Redirect, write_redirects};
use crate::utils::plural::plural_count;
use crate::{debug, debug_do, log};

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub posts: Vec<Post>,
    pub feed: Option<PathBuf>,
    pub redirects: Vec<Redirect>,
}

/// Load posts, then write the feed and redirect pages.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let start = Instant::now();

    let posts = load_posts(&config.build.content, config.build.drafts)?;
    log!("build"; "loaded {}", plural_count(posts.len(), "post"));

    debug_do! {
        for post in &posts {
            debug!("build"; "{} -> {}", config.root_relative(&post.source).display(), post.url());
        }
    }

    let feed = build_feed(&posts, config)?;
    let redirects = write_redirects(config)?;

    log!("build"; "done in {:.2?}", start.elapsed());
    Ok(BuildReport {
        posts,
        feed,
        redirects,
    })
}
