//! Source tree node.

use std::collections::BTreeMap;

/// One MAM-XML element with its attributes and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceNode {
    /// Element name, e.g. `verse`, `kq`.
    pub tag: String,
    /// Attributes, ordered by name.
    pub attrs: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    /// Create a node with the given tag and nothing else.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder: add an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Builder: add a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: add several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Shorthand for `<text text="..."/>`.
    #[must_use]
    pub fn text(payload: impl Into<String>) -> Self {
        Self::new("text").with_attr("text", payload)
    }

    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// The `class` attribute, the second half of the dispatch key.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// The literal text carried in the `text` attribute.
    #[must_use]
    pub fn text_payload(&self) -> Option<&str> {
        self.attr("text")
    }

    #[must_use]
    pub fn osis_id(&self) -> Option<&str> {
        self.attr("osisID")
    }

    /// Whether any direct child has the given tag.
    #[must_use]
    pub fn has_child(&self, tag: &str) -> bool {
        self.children.iter().any(|c| c.tag == tag)
    }

    /// All descendants (not including `self`) with the given tag, in
    /// document order.
    #[must_use]
    pub fn descendants(&self, tag: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a Self>) {
        for child in &self.children {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_descendants(tag, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let node = SourceNode::new("kq")
            .with_attr("class", "sep-maqaf")
            .with_child(SourceNode::text("a"));
        assert_eq!(node.class(), Some("sep-maqaf"));
        assert_eq!(node.text_payload(), None);
        assert_eq!(node.children[0].text_payload(), Some("a"));
        assert!(node.has_child("text"));
        assert!(!node.has_child("kq-k"));
    }

    #[test]
    fn test_descendants_document_order() {
        let root = SourceNode::new("book")
            .with_child(
                SourceNode::new("chapter")
                    .with_child(SourceNode::new("verse").with_attr("osisID", "Gen.1.1"))
                    .with_child(SourceNode::new("verse").with_attr("osisID", "Gen.1.2")),
            )
            .with_child(SourceNode::new("verse").with_attr("osisID", "Gen.2.1"));
        let ids: Vec<_> = root
            .descendants("verse")
            .into_iter()
            .filter_map(SourceNode::osis_id)
            .collect();
        assert_eq!(ids, vec!["Gen.1.1", "Gen.1.2", "Gen.2.1"]);
    }

    #[test]
    fn test_descendants_excludes_self() {
        let verse = SourceNode::new("verse");
        assert!(verse.descendants("verse").is_empty());
    }
}
