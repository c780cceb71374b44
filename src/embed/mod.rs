//! Embedded static resources.
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars {
//!     source_path: "/old-url/",
//!     target_url: "/new-url",
//!     canonical_url: "https://example.com/new-url",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};
    use crate::utils::html::{escape, escape_attr};

    /// Variables for redirect.html template.
    ///
    /// Values are raw; `apply` escapes them.
    pub struct RedirectVars<'a> {
        pub source_path: &'a str,
        pub target_url: &'a str,
        pub canonical_url: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__CANONICAL_URL__", &escape_attr(self.canonical_url))
                .replace("__TARGET_URL__", &escape_attr(self.target_url))
                .replace("__SOURCE_PATH__", &escape(self.source_path))
        }
    }

    /// Redirect page written at each legacy path.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));
}

#[cfg(test)]
mod tests {
    use super::build::*;

    #[test]
    fn test_redirect_template_placeholders() {
        let content = REDIRECT_HTML.content();
        assert!(content.contains("__TARGET_URL__"));
        assert!(content.contains("__CANONICAL_URL__"));
        assert!(content.contains("__SOURCE_PATH__"));
    }

    #[test]
    fn test_redirect_render() {
        let html = REDIRECT_HTML.render(&RedirectVars {
            source_path: "/blog/old/",
            target_url: "/blog/new",
            canonical_url: "https://example.com/blog/new",
        });
        assert!(html.contains(r#"<meta http-equiv="refresh" content="0; url=/blog/new">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/blog/new">"#));
        assert!(html.contains("<code>/blog/old/</code>"));
        assert!(!html.contains("__"));
    }

    #[test]
    fn test_redirect_render_escapes() {
        let html = REDIRECT_HTML.render(&RedirectVars {
            source_path: "/a<b>/",
            target_url: "/x?a=1&b=\"2\"",
            canonical_url: "/x?a=1&b=\"2\"",
        });
        assert!(html.contains("/x?a=1&amp;b=&quot;2&quot;"));
        assert!(html.contains("/a&lt;b&gt;/"));
    }
}
