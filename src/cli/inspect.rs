//! Config-free commands: `slug` and `excerpt`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::args::{ExcerptArgs, SlugArgs};
use crate::excerpt::extract_excerpt;
use crate::permalink::{build_slug, build_url};
use crate::post::strip_front_matter;

/// URL (or bare slug) for a title and categories.
pub fn slug_for(args: &SlugArgs) -> String {
    if args.path_only {
        build_slug(&args.title, args.categories.as_slice())
    } else {
        build_url(&args.title, args.categories.as_slice())
    }
}

/// Execute slug command
pub fn run_slug(args: &SlugArgs) -> Result<()> {
    println!("{}", slug_for(args));
    Ok(())
}

/// Excerpt of a Markdown document, front matter stripped if present.
pub fn excerpt_for(content: &str) -> String {
    extract_excerpt(strip_front_matter(content))
}

/// Execute excerpt command
pub fn run_excerpt(args: &ExcerptArgs) -> Result<()> {
    let content = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    println!("{}", excerpt_for(&content));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug_args(title: &str, categories: &[&str], path_only: bool) -> SlugArgs {
        SlugArgs {
            title: title.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            path_only,
        }
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(
            slug_for(&slug_args("My Title", &["Engineering", "GraphQL"], false)),
            "/blog/engineering-graphql/my-title"
        );
        assert_eq!(
            slug_for(&slug_args("My Title", &["Engineering"], true)),
            "engineering/my-title"
        );
        assert_eq!(slug_for(&slug_args("Hello, World!", &[], false)), "/blog/hello-world");
    }

    #[test]
    fn test_excerpt_for_strips_front_matter() {
        let content = "---\ntitle: Hi\n---\n\nFirst paragraph.\n\nSecond.\n";
        assert_eq!(excerpt_for(content), "First paragraph.");
        assert_eq!(excerpt_for("No front matter here."), "No front matter here.");
    }

    #[test]
    fn test_run_excerpt_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "Body.").unwrap();
        assert!(run_excerpt(&ExcerptArgs { file: Some(path) }).is_ok());

        let missing = ExcerptArgs {
            file: Some(dir.path().join("missing.md")),
        };
        assert!(run_excerpt(&missing).is_err());
    }
}
