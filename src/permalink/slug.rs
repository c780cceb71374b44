//! Title and category slugification.
//!
//! Mirrors the link scheme of the old Jekyll site so that existing post
//! links keep resolving:
//!
//! ```text
//! "Hello, World! — Part 2"          -> "hello-world-part-2"
//! ("My Title", ["Engineering"])     -> "engineering/my-title"
//! ```

use super::Categories;
use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not an ASCII word character, whitespace or a hyphen.
static RE_NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid regex"));
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static RE_HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Build the slug for a post: `{categories}/{title}` or just `{title}`.
pub fn build_slug(title: &str, categories: impl Into<Categories>) -> String {
    let title_slug = slugify_title(title);
    let category_slug = slugify_categories(&categories.into());

    if category_slug.is_empty() {
        title_slug
    } else {
        format!("{category_slug}/{title_slug}")
    }
}

/// Lowercase, strip punctuation, hyphenate whitespace, collapse hyphens.
pub fn slugify_title(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = RE_NON_SLUG.replace_all(&lower, "");
    let hyphenated = RE_WHITESPACE.replace_all(stripped.trim(), "-");
    let collapsed = RE_HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Lowercase non-empty categories and join them with `-`.
///
/// Categories are not stripped: `"Web Dev"` stays `"web dev"`.
pub fn slugify_categories(categories: &Categories) -> String {
    categories
        .iter()
        .filter(|category| !category.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            build_slug("Hello, World! — Part 2", None::<&str>),
            "hello-world-part-2"
        );
        assert_eq!(build_slug("What's new in C++?", None::<&str>), "whats-new-in-c");
    }

    #[test]
    fn test_category_list() {
        assert_eq!(
            build_slug("My Title", vec!["Engineering", "Graphql"]),
            "engineering-graphql/my-title"
        );
    }

    #[test]
    fn test_single_category() {
        assert_eq!(build_slug("My Title", "Engineering"), "engineering/my-title");
    }

    #[test]
    fn test_no_categories() {
        assert_eq!(build_slug("My Title", Vec::<String>::new()), "my-title");
        assert_eq!(build_slug("My Title", None::<&str>), "my-title");
    }

    #[test]
    fn test_empty_categories_dropped() {
        assert_eq!(build_slug("My Title", vec!["", "Life", ""]), "life/my-title");
        assert_eq!(build_slug("My Title", ""), "my-title");
    }

    #[test]
    fn test_categories_only_lowercased() {
        assert_eq!(build_slug("Post", "Web Dev"), "web dev/post");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(slugify_title("a -- b"), "a-b");
        assert_eq!(
            slugify_title("GraphQL Fragments - Why are they useful?"),
            "graphql-fragments-why-are-they-useful"
        );
    }

    #[test]
    fn test_no_edge_hyphens() {
        assert_eq!(slugify_title("  padded title  "), "padded-title");
        assert_eq!(slugify_title("-dashed-"), "dashed");
        assert_eq!(slugify_title("¡Hola!"), "hola");
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        assert_eq!(slugify_title("Café Crème"), "caf-crme");
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        assert_eq!(slugify_title("snake_case 101"), "snake_case-101");
    }

    #[test]
    fn test_title_transform_is_idempotent() {
        for title in ["Hello, World! — Part 2", "  A  b  ", "x--y", "Rust & WebAssembly"] {
            let once = slugify_title(title);
            assert_eq!(slugify_title(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(build_slug("", None::<&str>), "");
        assert_eq!(build_slug("!!!", "Life"), "life/");
    }
}
