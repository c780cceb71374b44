//! `[redirects]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [redirects]
//! "/blog/old-name" = "/blog/new-name"
//! "/blog/engineering/graphql-fragments" = { to = "/blog/engineering/graphql-fragments-why-are-they-useful", status = 302 }
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::redirect::{REDIRECT_STATUSES, Redirect, normalize_source};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default status for the short `"from" = "to"` form.
pub const DEFAULT_STATUS: u16 = 301;

const fn default_status() -> u16 {
    DEFAULT_STATUS
}

/// Destination of a redirect: a bare URL, or a URL with a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RedirectTarget {
    To(String),
    Detailed {
        to: String,
        #[serde(default = "default_status")]
        status: u16,
    },
}

impl RedirectTarget {
    pub fn to(&self) -> &str {
        match self {
            Self::To(to) | Self::Detailed { to, .. } => to,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::To(_) => DEFAULT_STATUS,
            Self::Detailed { status, .. } => *status,
        }
    }
}

/// Legacy source paths mapped to their destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectsConfig(BTreeMap<String, RedirectTarget>);

impl RedirectsConfig {
    pub const FIELD: FieldPath = FieldPath::new("redirects");

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, from: impl Into<String>, target: RedirectTarget) {
        self.0.insert(from.into(), target);
    }

    /// Normalized redirect rules, ordered by source path.
    pub fn rules(&self) -> Vec<Redirect> {
        let mut rules: Vec<_> = self
            .0
            .iter()
            .map(|(from, target)| Redirect::new(from, target.to(), target.status()))
            .collect();
        rules.sort_by(|a, b| a.from.cmp(&b.from));
        rules
    }

    /// Validate redirect rules.
    ///
    /// # Checks
    /// - `to` is not empty
    /// - `status` is one of 301, 302, 307, 308
    /// - no rule redirects a path to itself
    /// - no two sources normalize to the same path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();

        for (from, target) in &self.0 {
            let source = normalize_source(from);

            if target.to().trim().is_empty() {
                diag.error(Self::FIELD, format!("`{from}` has an empty destination"));
                continue;
            }

            if !REDIRECT_STATUSES.contains(&target.status()) {
                diag.error_with_hint(
                    Self::FIELD,
                    format!("`{from}` has unsupported status {}", target.status()),
                    "use one of 301, 302, 307, 308",
                );
            }

            let rule = Redirect::new(from, target.to(), target.status());
            if rule.is_self_redirect() {
                diag.error(Self::FIELD, format!("`{from}` redirects to itself"));
            }

            if let Some(previous) = seen.insert(source.clone(), from) {
                diag.error_with_hint(
                    Self::FIELD,
                    format!("`{previous}` and `{from}` both redirect from `{source}`"),
                    "keep only one of them",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(toml: &str) -> ConfigDiagnostics {
        let config = test_parse_config(toml);
        let mut diag = ConfigDiagnostics::new();
        config.redirects.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.redirects.is_empty());
    }

    #[test]
    fn test_short_and_detailed_forms() {
        let config = test_parse_config(
            "[redirects]\n\"/old\" = \"/new\"\n\"/blog/engineering/graphql-fragments\" = { to = \"/blog/engineering/graphql-fragments-why-are-they-useful\", status = 302 }\n\"/moved\" = { to = \"/here\" }",
        );
        assert_eq!(config.redirects.len(), 3);

        let rules = config.redirects.rules();
        let graphql = &rules[0];
        assert_eq!(graphql.from, "/blog/engineering/graphql-fragments/");
        assert_eq!(
            graphql.to,
            "/blog/engineering/graphql-fragments-why-are-they-useful"
        );
        assert_eq!(graphql.status, 302);

        let moved = rules.iter().find(|r| r.from == "/moved/").unwrap();
        assert_eq!(moved.status, 301);

        let old = rules.iter().find(|r| r.from == "/old/").unwrap();
        assert_eq!(old.to, "/new");
        assert_eq!(old.status, 301);
    }

    #[test]
    fn test_valid_rules() {
        let diag = validate(
            "[redirects]\n\"/a\" = \"/b\"\n\"/c\" = { to = \"https://example.org/\", status = 308 }",
        );
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_status() {
        let diag = validate("[redirects]\n\"/a\" = { to = \"/b\", status = 200 }");
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_self_redirect() {
        let diag = validate("[redirects]\n\"/a\" = \"/a/\"");
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("itself"));
    }

    #[test]
    fn test_colliding_sources() {
        let diag = validate("[redirects]\n\"/a\" = \"/b\"\n\"a/\" = \"/c\"");
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("both redirect"));
    }

    #[test]
    fn test_empty_destination() {
        let diag = validate("[redirects]\n\"/a\" = \"  \"");
        assert_eq!(diag.len(), 1);
    }
}
