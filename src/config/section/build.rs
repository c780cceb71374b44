//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content/blog"    # Markdown posts (relative to site root)
//! output = "dist"             # Feed and redirect output (relative to site root)
//! drafts = false              # Include draft posts
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Post source directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Include draft posts.
    pub drafts: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content/blog".into(),
            output: "dist".into(),
            drafts: false,
        }
    }
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    /// Validate build paths.
    ///
    /// Called after paths are resolved against the site root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("content directory `{}` not found", self.content.display()),
                "create it or point `build.content` at your posts",
            );
        }

        if self.output == self.content {
            diag.error(
                Self::OUTPUT,
                "output directory must differ from the content directory",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("content/blog"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.drafts);
    }

    #[test]
    fn test_custom_config() {
        let config =
            test_parse_config("[build]\ncontent = \"posts\"\noutput = \"public\"\ndrafts = true");
        assert_eq!(config.build.content, PathBuf::from("posts"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.drafts);
    }

    #[test]
    fn test_validate() {
        let dir = TempDir::new().unwrap();
        let build = BuildSectionConfig {
            content: dir.path().to_path_buf(),
            output: dir.path().join("dist"),
            drafts: false,
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.is_empty());

        let build = BuildSectionConfig {
            content: dir.path().join("missing"),
            output: dir.path().join("missing"),
            drafts: false,
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
