//! `[site.info]` configuration.
//!
//! Basic site information used as the feed channel metadata.

use crate::config::section::FeedConfig;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata for feed generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Author email.
    pub email: String,

    /// Site description.
    pub description: String,

    /// Site URL, prepended to post URLs in feeds (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en-GB").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            description: String::new(),
            url: None,
            language: "en-GB".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.info.url");

    /// Site URL without a trailing slash, empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "{} is enabled but {} is not configured",
                    FeedConfig::ENABLE,
                    Self::URL
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none_or(str::is_empty) {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
