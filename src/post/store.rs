//! Loading every post under a content directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use super::{Post, load_post};
use crate::utils::plural::plural_count;
use crate::{debug, log};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Load all posts under `content_dir`, newest first.
///
/// Files that fail to parse are logged and skipped. Drafts are dropped
/// unless `include_drafts` is set. Posts without a date sort last, and
/// equal dates are ordered by URL.
pub fn load_posts(content_dir: &Path, include_drafts: bool) -> Result<Vec<Post>> {
    if !content_dir.is_dir() {
        bail!("content directory `{}` not found", content_dir.display());
    }

    let files = collect_markdown_files(content_dir);
    debug!("posts"; "found {} in {}", plural_count(files.len(), "file"), content_dir.display());

    let results: Vec<_> = files.par_iter().map(|path| load_post(path)).collect();

    let mut posts = Vec::with_capacity(results.len());
    let mut failed = 0;
    let mut drafts = 0;
    for result in results {
        match result {
            Ok(post) if post.is_draft() && !include_drafts => drafts += 1,
            Ok(post) => posts.push(post),
            Err(e) => {
                failed += 1;
                log!("posts"; "skipping {}", format_error_chain(&e));
            }
        }
    }

    if drafts > 0 {
        debug!("posts"; "skipped {}", plural_count(drafts, "draft"));
    }
    if failed > 0 {
        log!("posts"; "{} failed to load", plural_count(failed, "file"));
    }

    sort_posts(&mut posts);
    warn_duplicate_urls(&posts);
    Ok(posts)
}

fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| is_markdown(path))
        .collect();
    files.sort();
    files
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Newest first; undated posts last; ties by URL.
fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| (std::cmp::Reverse(post.date()), post.url()));
}

fn warn_duplicate_urls(posts: &[Post]) {
    let mut by_url: BTreeMap<String, Vec<&Path>> = BTreeMap::new();
    for post in posts {
        by_url.entry(post.url()).or_default().push(&post.source);
    }

    for (url, sources) in by_url.iter().filter(|(_, s)| s.len() > 1) {
        let sources: Vec<_> = sources.iter().map(|p| p.display().to_string()).collect();
        log!("posts"; "warning: {url} is produced by {}", sources.join(", "));
    }
}

fn format_error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
