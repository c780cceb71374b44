//! Jekyll-style post permalinks.
//!
//! Posts live at `/blog/:categories/:title`, where `:categories` is the
//! hyphen-joined, lowercased category list and `:title` is the slugified
//! title. Posts without categories live directly under `/blog/`.

mod slug;

pub use slug::{build_slug, slugify_categories, slugify_title};

use serde::{Deserialize, Serialize};

/// URL prefix shared by every post.
pub const BLOG_PREFIX: &str = "/blog/";

/// Build the site-relative URL of a post.
pub fn build_url(title: &str, categories: impl Into<Categories>) -> String {
    format!("{BLOG_PREFIX}{}", build_slug(title, categories))
}

/// Ordered post categories.
///
/// Front matter may give either `categories: Engineering` or
/// `categories: [Engineering, GraphQL]`; both deserialize here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Categories(Vec<String>);

impl Categories {
    pub fn new(categories: Vec<String>) -> Self {
        Self(categories)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let raw: Option<Raw> = Option::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::One(category)) => Self(vec![category]),
            Some(Raw::Many(categories)) => Self(categories),
            None => Self::default(),
        })
    }
}

impl From<Vec<String>> for Categories {
    fn from(categories: Vec<String>) -> Self {
        Self(categories)
    }
}

impl From<Vec<&str>> for Categories {
    fn from(categories: Vec<&str>) -> Self {
        Self(categories.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for Categories {
    fn from(categories: &[String]) -> Self {
        Self(categories.to_vec())
    }
}

impl From<&str> for Categories {
    fn from(category: &str) -> Self {
        Self(vec![category.to_string()])
    }
}

impl From<String> for Categories {
    fn from(category: String) -> Self {
        Self(vec![category])
    }
}

impl<T: Into<Categories>> From<Option<T>> for Categories {
    fn from(categories: Option<T>) -> Self {
        categories.map(Into::into).unwrap_or_default()
    }
}

impl From<&Categories> for Categories {
    fn from(categories: &Categories) -> Self {
        categories.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_prefix() {
        assert_eq!(build_url("My Title", "Engineering"), "/blog/engineering/my-title");
        assert_eq!(build_url("My Title", None::<&str>), "/blog/my-title");
        assert!(build_url("", None::<&str>).starts_with(BLOG_PREFIX));
    }

    #[test]
    fn test_categories_from_yaml_string() {
        let categories: Categories = serde_yaml_ng::from_str("Engineering").unwrap();
        assert_eq!(categories.as_slice(), ["Engineering"]);
    }

    #[test]
    fn test_categories_from_yaml_list() {
        let categories: Categories = serde_yaml_ng::from_str("[Engineering, GraphQL]").unwrap();
        assert_eq!(categories.as_slice(), ["Engineering", "GraphQL"]);
    }

    #[test]
    fn test_categories_from_null() {
        let categories: Categories = serde_yaml_ng::from_str("~").unwrap();
        assert!(categories.is_empty());
    }

    #[test]
    fn test_categories_serialize_as_list() {
        let categories = Categories::from("Life");
        assert_eq!(serde_json::to_string(&categories).unwrap(), r#"["Life"]"#);
    }
}
