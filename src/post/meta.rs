//! Post metadata from front matter.

use serde::{Deserialize, Serialize};

use crate::permalink::Categories;
use crate::utils::date::PostDate;

/// Post metadata from YAML or TOML front matter.
///
/// # Fields
///
/// | Field         | Type                | Description                      |
/// |---------------|---------------------|----------------------------------|
/// | `title`       | `String`            | Post title (required)            |
/// | `date`        | `PostDate`          | Publication date, needed in feeds|
/// | `categories`  | `String \| [String]`| Category path of the URL         |
/// | `description` | `String`            | Feed description                 |
/// | `draft`       | `bool`              | Draft status (default: false)    |
///
/// Other keys (`layout`, `tags`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMeta {
    pub title: Option<String>,
    pub date: Option<PostDate>,
    pub categories: Categories,
    pub description: Option<String>,
    pub draft: bool,
}

impl PostMeta {
    /// Description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
