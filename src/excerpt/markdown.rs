//! Markdown to HTML rendering using pulldown-cmark.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Options for markdown rendering
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Pass raw HTML through. When disabled, HTML in the source is
    /// rendered as escaped text.
    pub raw_html: bool,
}

impl Default for MarkdownOptions {
    /// CommonMark with tables and strikethrough, raw HTML escaped.
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            footnotes: false,
            task_lists: false,
            raw_html: false,
        }
    }
}

impl MarkdownOptions {
    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Render markdown to an HTML string.
///
/// Never fails: pulldown-cmark renders whatever it can parse.
pub fn render_markdown(markdown: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);

    if options.raw_html {
        html::push_html(&mut out, parser);
    } else {
        html::push_html(&mut out, parser.map(escape_raw_html));
    }
    out
}

/// Turn raw HTML into text so the tags show up escaped.
///
/// HTML blocks become paragraphs holding their source lines.
fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::HtmlBlock) => Event::Start(Tag::Paragraph),
        Event::End(TagEnd::HtmlBlock) => Event::End(TagEnd::Paragraph),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        render_markdown(markdown, &MarkdownOptions::default())
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(render("one\n\ntwo"), "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn test_inline_formatting() {
        assert_eq!(
            render("*a* **b** `c`"),
            "<p><em>a</em> <strong>b</strong> <code>c</code></p>\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render("Tom & Jerry"), "<p>Tom &amp; Jerry</p>\n");
    }

    #[test]
    fn test_inline_html_escaped() {
        assert_eq!(render("a <span>b</span>"), "<p>a &lt;span&gt;b&lt;/span&gt;</p>\n");
    }

    #[test]
    fn test_block_html_escaped() {
        let html = render("<div>hi</div>");
        assert!(html.starts_with("<p>&lt;div&gt;hi&lt;/div&gt;"), "{html}");
        assert!(html.trim_end().ends_with("</p>"), "{html}");
    }

    #[test]
    fn test_raw_html_passthrough() {
        let options = MarkdownOptions {
            raw_html: true,
            ..MarkdownOptions::default()
        };
        assert_eq!(render_markdown("<div>hi</div>", &options).trim_end(), "<div>hi</div>");
    }

    #[test]
    fn test_tables_enabled() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_unclosed_markup_degrades() {
        assert_eq!(render("**unclosed"), "<p>**unclosed</p>\n");
    }
}
