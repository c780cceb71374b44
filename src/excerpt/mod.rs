//! Plain-text excerpts from Markdown post bodies.
//!
//! ```text
//! markdown ──render──▶ html ──to text (first <p>)──▶ text ──to text──▶ excerpt
//! ```
//!
//! The second text pass runs on output that is already plain. Markup that
//! the renderer escaped (raw HTML in the source) is decoded by the first
//! pass into literal tags, and only the second pass flattens those. A
//! body without a paragraph yields nothing in the first pass; the second
//! pass converts its whole input when there is no `<p>` in it.

mod markdown;
mod text;

pub use markdown::{MarkdownOptions, render_markdown};
pub use text::{TextOptions, html_to_text};

/// Excerpt of a Markdown body using the default options.
pub fn extract_excerpt(body: &str) -> String {
    Excerpter::default().extract(body)
}

/// Configurable excerpt extraction.
#[derive(Debug, Clone)]
pub struct Excerpter {
    pub markdown: MarkdownOptions,
    pub text: TextOptions,
}

impl Default for Excerpter {
    fn default() -> Self {
        Self {
            markdown: MarkdownOptions::default(),
            text: TextOptions::first_paragraph(),
        }
    }
}

impl Excerpter {
    pub fn extract(&self, body: &str) -> String {
        let html = render_markdown(body, &self.markdown);
        let text = html_to_text(&html, &self.text);
        html_to_text(&text, &self.text.with_document_fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paragraph_unchanged() {
        assert_eq!(
            extract_excerpt("Just one paragraph of text.\n"),
            "Just one paragraph of text."
        );
    }

    #[test]
    fn test_first_of_many_paragraphs() {
        let body = "First paragraph.\n\nSecond paragraph.\n\nThird.";
        assert_eq!(extract_excerpt(body), "First paragraph.");
    }

    #[test]
    fn test_heading_only_is_empty() {
        assert_eq!(extract_excerpt("# Just a heading"), "");
        assert_eq!(extract_excerpt(""), "");
    }

    #[test]
    fn test_skips_leading_heading() {
        assert_eq!(extract_excerpt("# Title\n\nThe body starts here."), "The body starts here.");
    }

    #[test]
    fn test_skips_tight_list() {
        assert_eq!(extract_excerpt("- one\n- two\n\nAfter the list."), "After the list.");
    }

    #[test]
    fn test_soft_wrapped_lines_joined() {
        assert_eq!(extract_excerpt("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_hard_break_flattened_by_second_pass() {
        assert_eq!(
            html_to_text("<p>a<br />b</p>", &TextOptions::first_paragraph()),
            "a\nb"
        );
        assert_eq!(extract_excerpt("a  \nb"), "a b");
    }

    #[test]
    fn test_inline_formatting_and_links() {
        assert_eq!(
            extract_excerpt("Some *emphasis*, `code` and a [link](https://example.com)."),
            "Some emphasis, code and a link [https://example.com]."
        );
    }

    #[test]
    fn test_raw_html_flattened_by_second_pass() {
        let options = TextOptions::first_paragraph();
        let html = render_markdown("Use <b>bold</b> text", &MarkdownOptions::default());
        assert_eq!(html_to_text(&html, &options), "Use <b>bold</b> text");
        assert_eq!(extract_excerpt("Use <b>bold</b> text"), "Use bold text");
    }

    #[test]
    fn test_entities() {
        assert_eq!(extract_excerpt("Tom & Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_first_paragraph_inside_blockquote() {
        assert_eq!(extract_excerpt("> quoted first\n\nthen prose"), "quoted first");
    }

    #[test]
    fn test_html_block_as_first_paragraph() {
        assert_eq!(
            extract_excerpt("<div>Intro in a div</div>\n\nSecond paragraph."),
            "Intro in a div"
        );
        assert_eq!(extract_excerpt("<section>Hi</section>"), "Hi");
    }

    #[test]
    fn test_inline_html_with_block_tag() {
        assert_eq!(
            extract_excerpt("Text with <li>item</li> inline."),
            "Text with\n * item\ninline."
        );
    }

    #[test]
    fn test_bare_less_than_in_prose() {
        assert_eq!(
            extract_excerpt("If a < b and c > d then done."),
            "If a < b and c > d then done."
        );
        assert_eq!(
            extract_excerpt("Hearts <3 and arrows -> here."),
            "Hearts <3 and arrows -> here."
        );
    }

    #[test]
    fn test_idempotent() {
        for body in [
            "Plain paragraph.",
            "# Heading\n\nSome *emphasis* here.\n\nMore.",
            "A [link](https://example.com/post) inside.",
            "a  \nb",
            "<div>Intro in a div</div>\n\nSecond paragraph.",
            "<section>Hi</section>",
            "If a < b and c > d then done.",
            "Hearts <3 and arrows -> here.",
        ] {
            let once = extract_excerpt(body);
            assert_eq!(extract_excerpt(&once), once, "not idempotent for {body:?}");
        }
    }
}
