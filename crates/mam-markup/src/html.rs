//! HTML string rendering.
//!
//! Produces `<tag attrs>{lb1}{contents}</tag>{lb2}` where the line breaks
//! and the closing tag are controlled by each element's [`Layout`]. Text is
//! HTML-escaped and the three special spaces the verse handlers emit are
//! written as named entities so they survive spreadsheet round-trips.

use std::fmt::Write;

use crate::chars::{EMSP, MAQAF, NBSP, THSP};
use crate::node::{Attrs, Contents, Element, Layout, Markup};

/// Renders markup to HTML strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlWriter {
    add_wbr: bool,
}

impl HtmlWriter {
    /// Writer that renders text verbatim (after escaping).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `<wbr>` after every maqaf so long hyphenated words can wrap.
    #[must_use]
    pub fn with_wbr(mut self, add_wbr: bool) -> Self {
        self.add_wbr = add_wbr;
        self
    }

    /// Render a sequence of markup values to one string.
    #[must_use]
    pub fn render(&self, parts: &[Markup]) -> String {
        let mut out = String::new();
        for part in parts {
            self.write_markup(part, &mut out);
        }
        out
    }

    /// Render a full document (see [`document`]) with its doctype line.
    #[must_use]
    pub fn render_document(&self, html_el: &Element) -> String {
        let mut out = String::from("<!doctype html>\n");
        self.write_element(html_el, &mut out);
        out
    }

    fn write_markup(&self, part: &Markup, out: &mut String) {
        match part {
            Markup::Text(text) => self.write_text(text, out),
            Markup::Element(el) => self.write_element(el, out),
        }
    }

    fn write_text(&self, text: &str, out: &mut String) {
        let escaped = escape_text(text);
        if self.add_wbr {
            out.push_str(&escaped.replace(MAQAF, &format!("{MAQAF}<wbr>")));
        } else {
            out.push_str(&escaped);
        }
    }

    fn write_element(&self, el: &Element, out: &mut String) {
        let layout = el.layout();
        out.push('<');
        out.push_str(el.tag());
        for (key, value) in el.attrs() {
            let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
        }
        out.push('>');
        if layout.break_after_open {
            out.push('\n');
        }
        for part in el.contents() {
            self.write_markup(part, out);
        }
        if layout.close {
            let _ = write!(out, "</{}>", el.tag());
        }
        if layout.break_after_close {
            out.push('\n');
        }
    }
}

/// Escape text content, writing special spaces as named entities.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ if is_char(ch, NBSP) => result.push_str("&nbsp;"),
            _ if is_char(ch, THSP) => result.push_str("&thinsp;"),
            _ if is_char(ch, EMSP) => result.push_str("&emsp;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Escape an attribute value, including both quote characters.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(ch),
        }
    }
    result
}

fn is_char(ch: char, single: &str) -> bool {
    single.chars().next() == Some(ch)
}

/// Build an `<html>` element with a head (charset, title, optional inline
/// style) and the given body contents.
#[must_use]
pub fn document(title: &str, body: impl Into<Contents>, style: Option<&str>) -> Element {
    let meta = Element::new(
        "meta",
        Attrs::from([("charset".to_owned(), "utf-8".to_owned())]),
        Contents::default(),
        Layout::VOID_LINE,
    );
    let mut head_contents = vec![
        Markup::from(meta),
        Markup::from(Element::new("title", Attrs::new(), title, Layout::BLOCK)),
    ];
    if let Some(style) = style {
        head_contents.push(Element::new("style", Attrs::new(), style, Layout::BLOCK).into());
    }
    let head = Element::new("head", Attrs::new(), head_contents, Layout::BLOCK);
    let body = Element::new("body", Attrs::new(), body, Layout::BLOCK);
    Element::new(
        "html",
        Attrs::from([("lang".to_owned(), "en".to_owned())]),
        vec![Markup::from(head), Markup::from(body)],
        Layout::BLOCK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{bold, line_break, para, span_c};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_inline_span() {
        let html = HtmlWriter::new().render(&[span_c("(אמר)", "mam-kq-k").into()]);
        assert_eq!(html, r#"<span class="mam-kq-k">(אמר)</span>"#);
    }

    #[test]
    fn test_render_br_has_no_close_tag() {
        let html = HtmlWriter::new().render(&["a".into(), line_break().into(), "b".into()]);
        assert_eq!(html, "a<br>b");
    }

    #[test]
    fn test_special_spaces_become_entities() {
        let text = format!("{NBSP}x{THSP}y{EMSP}");
        let html = HtmlWriter::new().render(&[Markup::Text(text)]);
        assert_eq!(html, "&nbsp;x&thinsp;y&emsp;");
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_attr_escaping() {
        assert_eq!(escape_attr(r#"a"b'c"#), "a&quot;b&#x27;c");
    }

    #[test]
    fn test_wbr_after_maqaf() {
        let text = format!("כל{MAQAF}העם");
        let html = HtmlWriter::new()
            .with_wbr(true)
            .render(&[Markup::Text(text)]);
        assert_eq!(html, format!("כל{MAQAF}<wbr>העם"));
    }

    #[test]
    fn test_nested_inline() {
        let outer = span_c(vec![Markup::from("a"), bold("b").into()], "c");
        let html = HtmlWriter::new().render(&[outer.into()]);
        assert_eq!(html, r#"<span class="c">a<b>b</b></span>"#);
    }

    #[test]
    fn test_render_document() {
        let doc = document("t", vec![Markup::from(para("x"))], None);
        let html = HtmlWriter::new().render_document(&doc);
        assert_eq!(
            html,
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>\nt</title>\n</head>\n<body>\n<p>x</p>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn test_document_with_style() {
        let doc = document("t", Contents::default(), Some("p {}"));
        let html = HtmlWriter::new().render_document(&doc);
        assert!(html.contains("<style>\np {}</style>\n"));
    }
}
