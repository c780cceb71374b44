//! Blog posts: Markdown files with front matter.
//!
//! A post's URL and excerpt are derived, never stored:
//!
//! ```text
//! content/blog/graphql.md
//!   ├── front matter ──▶ PostMeta { title, date, categories, ... }
//!   │                       └── build_url(title, categories) ──▶ /blog/engineering/graphql-fragments
//!   └── body ──────────────▶ extract_excerpt(body) ──▶ "First paragraph..."
//! ```

mod error;
mod frontmatter;
mod meta;
mod store;

pub use error::PostError;
pub use frontmatter::{FrontMatterFormat, parse_front_matter, split_front_matter, strip_front_matter};
pub use meta::PostMeta;
pub use store::load_posts;

use std::fs;
use std::path::{Path, PathBuf};

use crate::excerpt::extract_excerpt;
use crate::permalink::{Categories, build_slug, build_url};
use crate::utils::date::PostDate;

/// A parsed post.
#[derive(Debug, Clone)]
pub struct Post {
    pub source: PathBuf,
    pub meta: PostMeta,
    pub body: String,
}

impl Post {
    /// Build a post from file content, validating the front matter.
    pub fn parse(source: impl Into<PathBuf>, content: &str) -> Result<Self, PostError> {
        let source = source.into();
        let Some((format, raw, body)) = split_front_matter(content) else {
            return Err(PostError::MissingFrontMatter(source));
        };

        let meta = parse_front_matter(format, raw, &source)?;
        if meta.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            return Err(PostError::MissingTitle(source));
        }

        Ok(Self {
            source,
            meta,
            body: body.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or_default()
    }

    pub fn date(&self) -> Option<PostDate> {
        self.meta.date
    }

    pub fn categories(&self) -> &Categories {
        &self.meta.categories
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }

    /// `<categories>/<title>` slug.
    pub fn slug(&self) -> String {
        build_slug(self.title(), self.categories())
    }

    /// Site-relative URL, `/blog/<slug>`.
    pub fn url(&self) -> String {
        build_url(self.title(), self.categories())
    }

    /// Plain-text first paragraph of the body.
    pub fn excerpt(&self) -> String {
        extract_excerpt(&self.body)
    }

    /// Description, falling back to the excerpt when missing or blank.
    pub fn summary(&self) -> String {
        match self.meta.description() {
            Some(description) => description.to_string(),
            None => self.excerpt(),
        }
    }
}

/// Read and parse a single post.
pub fn load_post(path: &Path) -> Result<Post, PostError> {
    let content = fs::read_to_string(path).map_err(|e| PostError::Io(path.to_path_buf(), e))?;
    Post::parse(path, &content)
}
