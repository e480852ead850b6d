//! Markup tree node.

use std::collections::BTreeMap;

/// Element attributes, ordered by key for deterministic output.
pub type Attrs = BTreeMap<String, String>;

/// A rendered value: plain text or a tagged element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Plain text leaf.
    Text(String),
    /// Tagged element with attributes and contents.
    Element(Element),
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Markup {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Markup {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Line-break and closing-tag hints used by the HTML writer.
///
/// `break_after_open` is the newline emitted after `<tag ...>`,
/// `break_after_close` the one after `</tag>` (or after the open tag when
/// `close` is false).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub break_after_open: bool,
    pub break_after_close: bool,
    pub close: bool,
}

impl Layout {
    /// Newline after both the open and the close tag.
    pub const BLOCK: Self = Self {
        break_after_open: true,
        break_after_close: true,
        close: true,
    };

    /// No newlines; used for everything a verse handler emits.
    pub const INLINE: Self = Self {
        break_after_open: false,
        break_after_close: false,
        close: true,
    };

    /// Inline void element such as `<br>`.
    pub const INLINE_VOID: Self = Self {
        break_after_open: false,
        break_after_close: false,
        close: false,
    };

    /// Newline only after the close tag (`<p>`, `<tr>`).
    pub const TRAILING_BREAK: Self = Self {
        break_after_open: false,
        break_after_close: true,
        close: true,
    };

    /// Void element followed by a newline (`<meta>`, `<link>`).
    pub const VOID_LINE: Self = Self {
        break_after_open: true,
        break_after_close: false,
        close: false,
    };
}

/// Contents accepted by element constructors.
///
/// Lets callers pass a single string, a single node, or a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contents(pub Vec<Markup>);

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Self(vec![Markup::from(text)])
    }
}

impl From<String> for Contents {
    fn from(text: String) -> Self {
        Self(vec![Markup::Text(text)])
    }
}

impl From<Markup> for Contents {
    fn from(part: Markup) -> Self {
        Self(vec![part])
    }
}

impl From<Element> for Contents {
    fn from(el: Element) -> Self {
        Self(vec![Markup::Element(el)])
    }
}

impl From<Vec<Markup>> for Contents {
    fn from(parts: Vec<Markup>) -> Self {
        Self(parts)
    }
}

impl<const N: usize> From<[Markup; N]> for Contents {
    fn from(parts: [Markup; N]) -> Self {
        Self(parts.into())
    }
}

/// HTML-like element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    contents: Vec<Markup>,
    layout: Layout,
}

impl Element {
    /// Create an element.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty, or if a `text` attribute is combined with
    /// non-empty contents. Both indicate a handler bug, not bad input.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        attrs: Attrs,
        contents: impl Into<Contents>,
        layout: Layout,
    ) -> Self {
        let tag = tag.into();
        let Contents(contents) = contents.into();
        assert!(!tag.is_empty(), "element tag must not be empty");
        assert!(
            contents.is_empty() || !attrs.contains_key("text"),
            "<{tag}> has both a text attribute and contents"
        );
        Self {
            tag,
            attrs,
            contents,
            layout,
        }
    }

    /// Create an inline element with no attributes.
    #[must_use]
    pub fn inline(tag: &str, contents: impl Into<Contents>) -> Self {
        Self::new(tag, Attrs::new(), contents, Layout::INLINE)
    }

    /// Same element with one more attribute.
    #[must_use]
    pub fn with_attr(self, key: &str, value: &str) -> Self {
        let mut attrs = self.attrs;
        attrs.insert(key.to_owned(), value.to_owned());
        Self::new(self.tag, attrs, self.contents, self.layout)
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Value of one attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Value of the `class` attribute.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    #[must_use]
    pub fn contents(&self) -> &[Markup] {
        &self.contents
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The single text child, if contents are exactly one string.
    #[must_use]
    pub fn sole_text(&self) -> Option<&str> {
        match self.contents.as_slice() {
            [Markup::Text(text)] => Some(text),
            _ => None,
        }
    }
}

fn class_attrs(class: &str) -> Attrs {
    Attrs::from([("class".to_owned(), class.to_owned())])
}

/// `<span>` with arbitrary attributes.
#[must_use]
pub fn span(contents: impl Into<Contents>, attrs: Attrs) -> Element {
    Element::new("span", attrs, contents, Layout::INLINE)
}

/// `<span class="...">`.
#[must_use]
pub fn span_c(contents: impl Into<Contents>, class: &str) -> Element {
    span(contents, class_attrs(class))
}

/// `<b>`.
#[must_use]
pub fn bold(contents: impl Into<Contents>) -> Element {
    Element::inline("b", contents)
}

/// `<i>`, optionally with a class.
#[must_use]
pub fn italic(contents: impl Into<Contents>, class: Option<&str>) -> Element {
    let attrs = class.map(class_attrs).unwrap_or_default();
    Element::new("i", attrs, contents, Layout::INLINE)
}

/// `<small>`.
#[must_use]
pub fn small(contents: impl Into<Contents>) -> Element {
    Element::inline("small", contents)
}

/// `<big>`.
#[must_use]
pub fn big(contents: impl Into<Contents>) -> Element {
    Element::inline("big", contents)
}

/// `<sup>`, optionally with a class.
#[must_use]
pub fn sup(contents: impl Into<Contents>, class: Option<&str>) -> Element {
    let attrs = class.map(class_attrs).unwrap_or_default();
    Element::new("sup", attrs, contents, Layout::INLINE)
}

/// `<br>` not followed by a newline.
#[must_use]
pub fn line_break() -> Element {
    Element::new("br", Attrs::new(), Contents::default(), Layout::INLINE_VOID)
}

/// `<p>` followed by a newline.
#[must_use]
pub fn para(contents: impl Into<Contents>) -> Element {
    Element::new("p", Attrs::new(), contents, Layout::TRAILING_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_c_sets_class() {
        let el = span_c("x", "mam-kq");
        assert_eq!(el.tag(), "span");
        assert_eq!(el.class(), Some("mam-kq"));
        assert_eq!(el.contents(), &[Markup::from("x")]);
        assert_eq!(el.layout(), Layout::INLINE);
    }

    #[test]
    fn test_line_break_is_void_and_empty() {
        let br = line_break();
        assert!(br.contents().is_empty());
        assert!(!br.layout().close);
    }

    #[test]
    fn test_sole_text() {
        assert_eq!(small("a").sole_text(), Some("a"));
        assert_eq!(small(vec![Markup::from("a"), bold("b").into()]).sole_text(), None);
    }

    #[test]
    fn test_with_attr_keeps_contents() {
        let el = sup("*", None).with_attr("class", "footnote-marker");
        assert_eq!(el.class(), Some("footnote-marker"));
        assert_eq!(el.sole_text(), Some("*"));
    }

    #[test]
    #[should_panic(expected = "tag must not be empty")]
    fn test_empty_tag_panics() {
        let _ = Element::inline("", "x");
    }

    #[test]
    #[should_panic(expected = "both a text attribute and contents")]
    fn test_text_attr_with_contents_panics() {
        let attrs = Attrs::from([("text".to_owned(), "a".to_owned())]);
        let _ = span("b", attrs);
    }

    #[test]
    fn test_text_attr_without_contents_is_allowed() {
        let attrs = Attrs::from([("text".to_owned(), "a".to_owned())]);
        let el = span(Contents::default(), attrs);
        assert_eq!(el.attr("text"), Some("a"));
    }
}
