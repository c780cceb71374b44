//! Redirect pages for legacy post URLs.
//!
//! Each rule becomes a static page at the old path:
//!
//! ```text
//! [redirects]
//! "/blog/engineering/graphql-fragments" = { to = "...-why-are-they-useful", status = 302 }
//!
//! dist/blog/engineering/graphql-fragments/index.html   (meta refresh + canonical)
//! dist/_redirects                                       (/from /to 302, for hosts that read it)
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::embed::build::{REDIRECT_HTML, RedirectVars};
use crate::log;
use crate::utils::plural::plural_count;

/// HTTP statuses a redirect rule may carry.
pub const REDIRECT_STATUSES: [u16; 4] = [301, 302, 307, 308];

/// Host redirect manifest written next to the pages.
pub const MANIFEST_NAME: &str = "_redirects";

/// A normalized redirect rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Source path, `/a/b/` form.
    pub from: String,
    /// Destination path or absolute URL.
    pub to: String,
    pub status: u16,
}

impl Redirect {
    pub fn new(from: &str, to: &str, status: u16) -> Self {
        Self {
            from: normalize_source(from),
            to: normalize_target(to),
            status,
        }
    }

    /// Whether the destination is on another origin.
    pub fn is_external(&self) -> bool {
        url::Url::parse(&self.to).is_ok()
    }

    pub fn is_self_redirect(&self) -> bool {
        !self.is_external() && normalize_source(&self.to) == self.from
    }

    /// Destination as an absolute URL when the site URL is known.
    pub fn canonical_url(&self, base_url: &str) -> String {
        if self.is_external() || base_url.is_empty() {
            self.to.clone()
        } else {
            format!("{base_url}{}", self.to)
        }
    }

    /// `/old-url/` -> `{output_dir}/old-url/index.html`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir
            .join(self.from.trim_start_matches('/'))
            .join("index.html")
    }

    pub fn render(&self, base_url: &str) -> String {
        REDIRECT_HTML.render(&RedirectVars {
            source_path: &self.from,
            target_url: &self.to,
            canonical_url: &self.canonical_url(base_url),
        })
    }
}

/// Normalize a source path to `/a/b/`.
///
/// Query strings and fragments are dropped; they never reach a static file.
pub fn normalize_source(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{path}/")
    }
}

/// Normalize a destination.
///
/// Absolute URLs are kept verbatim; site paths gain a leading `/`.
pub fn normalize_target(to: &str) -> String {
    let to = to.trim();
    if url::Url::parse(to).is_ok() || to.starts_with('/') {
        to.to_string()
    } else {
        format!("/{to}")
    }
}

/// Write a page for every `[redirects]` rule, plus the host manifest.
///
/// Returns the rules that were written.
pub fn write_redirects(config: &SiteConfig) -> Result<Vec<Redirect>> {
    let rules = config.redirects.rules();
    if rules.is_empty() {
        return Ok(rules);
    }

    let output_dir = &config.build.output;
    let base_url = config.site.info.base_url();

    for rule in &rules {
        let path = rule.output_path(output_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, rule.render(base_url))
            .with_context(|| format!("failed to write {}", path.display()))?;
        log!("redirect"; "{} -> {} ({})", rule.from, rule.to, rule.status);
    }

    let manifest = output_dir.join(MANIFEST_NAME);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    fs::write(&manifest, render_manifest(&rules))
        .with_context(|| format!("failed to write {}", manifest.display()))?;

    log!("redirect"; "wrote {}", plural_count(rules.len(), "redirect"));
    Ok(rules)
}

/// `_redirects` lines: `<from> <to> <status>`.
pub fn render_manifest(rules: &[Redirect]) -> String {
    let mut out = String::new();
    for rule in rules {
        // Both forms of the source: with and without trailing slash
        let bare = rule.from.trim_end_matches('/');
        if !bare.is_empty() {
            let _ = writeln!(out, "{bare} {} {}", rule.to, rule.status);
        }
        let _ = writeln!(out, "{} {} {}", rule.from, rule.to, rule.status);
    }
    out
}
