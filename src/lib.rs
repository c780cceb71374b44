//! slugfeed - Jekyll-style permalinks, excerpts and feeds for a Markdown blog.
//!
//! ```text
//! content/blog/*.md ──load_posts──▶ Post ──build_url──▶ /blog/<categories>/<title>
//!                                    │
//!                                    ├──extract_excerpt──▶ first paragraph, plain text
//!                                    └──build_feed──▶ dist/rss.xml
//! [redirects] ──write_redirects──▶ dist/<old>/index.html
//! ```

pub mod cli;
pub mod config;
mod embed;
pub mod excerpt;
pub mod feed;
pub mod logger;
pub mod permalink;
pub mod post;
pub mod redirect;
pub mod utils;

pub use excerpt::extract_excerpt;
pub use permalink::{build_slug, build_url};
