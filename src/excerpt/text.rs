//! HTML to plain text conversion.
//!
//! Walks a `tl` DOM in document order and writes flat text:
//!
//! - whitespace collapses inside a block; blocks are separated by newlines
//! - `<br>` becomes a newline, `<hr>` a line of dashes
//! - links render as `text [href]`, images as `alt [src]`
//! - headings and table header cells are uppercased
//! - entities are decoded
//!
//! With a base element set (e.g. `p`), only the first matching elements
//! are converted. When none match the result is empty, unless
//! `whole_document_fallback` is set, in which case everything is converted.
//!
//! A `<` only opens markup when a letter, `/`, `!` or `?` follows it, as in
//! HTML tokenization. Any other `<` is text.

use std::borrow::Cow;

use crate::utils::html::{is_block_element, is_skipped_element, unescape};
use tl::{HTMLTag, Node, NodeHandle, Parser, ParserOptions};

/// Characters collapsed into a single space outside `<pre>`.
const WHITESPACE: [char; 6] = [' ', '\t', '\r', '\n', '\u{000C}', '\u{200B}'];

/// Width of the dash line written for `<hr>`.
const HR_WIDTH: usize = 40;

/// Plain text conversion options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Wrap lines at this many columns. `None` disables wrapping.
    pub wordwrap: Option<usize>,
    /// Only convert elements with this tag name.
    pub base_element: Option<String>,
    /// Stop after this many base elements.
    pub max_base_elements: Option<usize>,
    /// Convert the whole input when no base element matches.
    pub whole_document_fallback: bool,
}

impl TextOptions {
    /// First paragraph only, no wrapping.
    pub fn first_paragraph() -> Self {
        Self {
            wordwrap: None,
            base_element: Some("p".into()),
            max_base_elements: Some(1),
            whole_document_fallback: false,
        }
    }

    /// Same selection, but falls back to the whole input.
    pub fn with_document_fallback(&self) -> Self {
        Self {
            whole_document_fallback: true,
            ..self.clone()
        }
    }
}

/// Convert an HTML string to plain text.
pub fn html_to_text(html: &str, options: &TextOptions) -> String {
    let mut writer = TextWriter::new(options.wordwrap);
    let html = escape_stray_lt(html);

    match tl::parse(&html, ParserOptions::default()) {
        Ok(dom) => {
            let parser = dom.parser();
            for root in select_roots(dom.children(), parser, options) {
                writer.walk(root, parser);
            }
        }
        Err(_) => writer.text(&html),
    }

    writer.finish()
}

/// Encode every `<` that cannot start a tag, comment or declaration.
fn escape_stray_lt(html: &str) -> Cow<'_, str> {
    let opens_markup = |next: Option<char>| {
        next.is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
    };

    let mut chars = html.char_indices().peekable();
    let mut escaped: Option<String> = None;
    let mut copied = 0;

    while let Some((i, c)) = chars.next() {
        if c == '<' && !opens_markup(chars.peek().map(|&(_, next)| next)) {
            let out = escaped.get_or_insert_with(|| String::with_capacity(html.len() + 8));
            out.push_str(&html[copied..i]);
            out.push_str("&lt;");
            copied = i + 1;
        }
    }

    match escaped {
        Some(mut out) => {
            out.push_str(&html[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(html),
    }
}

/// Pick the subtrees to convert.
fn select_roots(top: &[NodeHandle], parser: &Parser<'_>, options: &TextOptions) -> Vec<NodeHandle> {
    let Some(base) = options.base_element.as_deref() else {
        return top.to_vec();
    };

    let limit = options.max_base_elements.unwrap_or(usize::MAX);
    let mut found = Vec::new();
    for handle in top {
        if found.len() >= limit {
            break;
        }
        collect_matching(*handle, parser, base, limit, &mut found);
    }

    if found.is_empty() && options.whole_document_fallback {
        return top.to_vec();
    }
    found
}

/// Depth-first search for `base` elements, not descending into matches.
fn collect_matching(
    handle: NodeHandle,
    parser: &Parser<'_>,
    base: &str,
    limit: usize,
    found: &mut Vec<NodeHandle>,
) {
    let Some(Node::Tag(tag)) = handle.get(parser) else {
        return;
    };
    if tag_name(tag) == base {
        found.push(handle);
        return;
    }
    for child in tag.children().top().iter() {
        if found.len() >= limit {
            return;
        }
        collect_matching(*child, parser, base, limit, found);
    }
}

fn tag_name(tag: &HTMLTag<'_>) -> String {
    tag.name().as_utf8_str().to_ascii_lowercase()
}

/// Decoded attribute value.
fn attr(tag: &HTMLTag<'_>, name: &str) -> Option<String> {
    tag.attributes()
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, value)| value)
        .map(|value| unescape(&value).trim().to_string())
}

// =============================================================================
// Writer
// =============================================================================

struct TextWriter {
    wordwrap: Option<usize>,
    /// Finished blocks.
    out: String,
    /// Block being written.
    line: String,
    /// Newlines owed before the next non-empty block.
    gap: usize,
    pending_space: bool,
    pre_depth: usize,
    uppercase_depth: usize,
    /// `None` for `<ul>`, next item number for `<ol>`.
    lists: Vec<Option<usize>>,
}

impl TextWriter {
    fn new(wordwrap: Option<usize>) -> Self {
        Self {
            wordwrap,
            out: String::new(),
            line: String::new(),
            gap: 0,
            pending_space: false,
            pre_depth: 0,
            uppercase_depth: 0,
            lists: Vec::new(),
        }
    }

    fn walk(&mut self, handle: NodeHandle, parser: &Parser<'_>) {
        match handle.get(parser) {
            Some(Node::Raw(bytes)) => self.text(&bytes.as_utf8_str()),
            Some(Node::Tag(tag)) => self.element(tag, parser),
            Some(Node::Comment(_)) | None => {}
        }
    }

    fn children(&mut self, tag: &HTMLTag<'_>, parser: &Parser<'_>) {
        for child in tag.children().top().iter() {
            self.walk(*child, parser);
        }
    }

    fn element(&mut self, tag: &HTMLTag<'_>, parser: &Parser<'_>) {
        let name = tag_name(tag);
        match name.as_str() {
            n if is_skipped_element(n) => {}
            "br" => self.line_break(),
            "hr" => {
                self.block(1);
                self.line.push_str(&"-".repeat(HR_WIDTH));
                self.block(1);
            }
            "a" => self.anchor(tag, parser),
            "img" => self.image(tag),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.block(2);
                self.uppercase_depth += 1;
                self.children(tag, parser);
                self.uppercase_depth -= 1;
                self.block(2);
            }
            "pre" => {
                self.block(2);
                self.pre_depth += 1;
                self.children(tag, parser);
                self.pre_depth -= 1;
                self.block(2);
            }
            "ul" | "ol" => {
                self.block(2);
                self.lists.push((name == "ol").then_some(1));
                self.children(tag, parser);
                self.lists.pop();
                self.block(2);
            }
            "li" => {
                self.block(1);
                let prefix = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        *n += 1;
                        format!("{}. ", *n - 1)
                    }
                    _ => " * ".to_string(),
                };
                self.line.push_str(&prefix);
                self.children(tag, parser);
                self.block(1);
            }
            "td" | "th" => {
                self.soft_space();
                let header = name == "th";
                self.uppercase_depth += usize::from(header);
                self.children(tag, parser);
                self.uppercase_depth -= usize::from(header);
            }
            "thead" | "tbody" | "tfoot" => self.children(tag, parser),
            "p" | "blockquote" | "table" => {
                self.block(2);
                self.children(tag, parser);
                self.block(2);
            }
            n if is_block_element(n) => {
                self.block(1);
                self.children(tag, parser);
                self.block(1);
            }
            _ => self.children(tag, parser),
        }
    }

    fn anchor(&mut self, tag: &HTMLTag<'_>, parser: &Parser<'_>) {
        self.children(tag, parser);

        let Some(href) = attr(tag, "href") else {
            return;
        };
        if href.is_empty() || href.starts_with('#') {
            return;
        }
        let href = href.strip_prefix("mailto:").unwrap_or(&href);
        self.soft_space();
        self.word(&format!("[{href}]"));
    }

    fn image(&mut self, tag: &HTMLTag<'_>) {
        let alt = attr(tag, "alt").unwrap_or_default();
        let src = attr(tag, "src").unwrap_or_default();
        let text = match (alt.is_empty(), src.is_empty()) {
            (_, true) => alt,
            (true, false) => format!("[{src}]"),
            (false, false) => format!("{alt} [{src}]"),
        };
        self.text(&text);
    }

    /// Append raw (entity-encoded) text.
    fn text(&mut self, raw: &str) {
        let decoded = unescape(raw);

        if self.pre_depth > 0 {
            for c in decoded.chars() {
                self.push_char(c);
            }
            return;
        }

        for c in decoded.chars() {
            if WHITESPACE.contains(&c) {
                self.soft_space();
            } else {
                if self.pending_space {
                    self.line.push(' ');
                    self.pending_space = false;
                }
                self.push_char(c);
            }
        }
    }

    /// Append text that must not be whitespace-collapsed or decoded.
    fn word(&mut self, word: &str) {
        if self.pending_space {
            self.line.push(' ');
            self.pending_space = false;
        }
        self.line.push_str(word);
    }

    fn push_char(&mut self, c: char) {
        if self.uppercase_depth > 0 {
            self.line.extend(c.to_uppercase());
        } else {
            self.line.push(c);
        }
    }

    /// Request a space before the next word; no-op at block start.
    fn soft_space(&mut self) {
        if !self.line.is_empty() && !self.line.ends_with([' ', '\n']) {
            self.pending_space = true;
        }
    }

    fn line_break(&mut self) {
        self.pending_space = false;
        self.line.push('\n');
    }

    /// End the current block; the next one starts after `gap` newlines.
    fn block(&mut self, gap: usize) {
        self.flush();
        self.gap = self.gap.max(gap);
    }

    fn flush(&mut self) {
        let text = self.line.trim_end();
        if !text.trim_start().is_empty() {
            if !self.out.is_empty() {
                for _ in 0..self.gap.max(1) {
                    self.out.push('\n');
                }
            }
            match self.wordwrap {
                Some(width) => self.out.push_str(&wrap(text, width)),
                None => self.out.push_str(text),
            }
            self.gap = 0;
        }
        self.line.clear();
        self.pending_space = false;
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out.trim().to_string()
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut wrapped = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            wrapped.push('\n');
        }
        let mut column = 0;
        for word in line.split(' ').filter(|word| !word.is_empty()) {
            let len = word.chars().count();
            if column > 0 && column + 1 + len > width {
                wrapped.push('\n');
                column = 0;
            } else if column > 0 {
                wrapped.push(' ');
                column += 1;
            }
            wrapped.push_str(word);
            column += len;
        }
    }
    wrapped
}
