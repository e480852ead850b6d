//! Handler table keyed by `(tag, class)`.

use std::collections::HashMap;
use std::fmt;

use mam_markup::Markup;
use mam_xml::SourceNode;

use crate::error::RenderError;

/// Rendered output of one child, kept alongside the child itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildOutput<'a> {
    pub node: &'a SourceNode,
    pub output: Vec<Markup>,
}

/// A handler receives the node, the shrunk concatenation of its children's
/// output (or its `text` payload), and each child's output separately.
pub type Handler =
    fn(&SourceNode, Vec<Markup>, &[ChildOutput<'_>]) -> Result<Vec<Markup>, RenderError>;

/// Tag plus optional class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DispatchKey {
    pub tag: String,
    pub class: Option<String>,
}

impl DispatchKey {
    #[must_use]
    pub fn new(tag: &str, class: Option<&str>) -> Self {
        Self {
            tag: tag.to_owned(),
            class: class.map(str::to_owned),
        }
    }

    /// Key for a source element.
    #[must_use]
    pub fn of(node: &SourceNode) -> Self {
        Self::new(&node.tag, node.class())
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "<{} class=\"{class}\">", self.tag),
            None => write!(f, "<{}>", self.tag),
        }
    }
}

/// Exact-match mapping from dispatch key to handler.
#[derive(Debug, Clone, Default)]
pub struct HandlerTable {
    handlers: HashMap<DispatchKey, Handler>,
}

impl HandlerTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `(tag, class)`, replacing any previous entry.
    pub fn insert(&mut self, tag: &str, class: Option<&str>, handler: Handler) {
        self.handlers.insert(DispatchKey::new(tag, class), handler);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, tag: &str, class: Option<&str>, handler: Handler) -> Self {
        self.insert(tag, class, handler);
        self
    }

    /// Handler for `key`. No fallback from a classed key to the bare tag.
    #[must_use]
    pub fn get(&self, key: &DispatchKey) -> Option<Handler> {
        self.handlers.get(key).copied()
    }

    #[must_use]
    pub fn contains(&self, tag: &str, class: Option<&str>) -> bool {
        self.handlers.contains_key(&DispatchKey::new(tag, class))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nothing(
        _: &SourceNode,
        _: Vec<Markup>,
        _: &[ChildOutput<'_>],
    ) -> Result<Vec<Markup>, RenderError> {
        Ok(Vec::new())
    }

    #[test]
    fn test_exact_match_only() {
        let table = HandlerTable::new().with("kq", None, nothing);
        assert!(table.get(&DispatchKey::new("kq", None)).is_some());
        assert!(table.get(&DispatchKey::new("kq", Some("sep-maqaf"))).is_none());
    }

    #[test]
    fn test_key_of_node() {
        let node = SourceNode::new("spi-invnun").with_attr("class", "including-trailing-space");
        assert_eq!(
            DispatchKey::of(&node),
            DispatchKey::new("spi-invnun", Some("including-trailing-space"))
        );
    }

    #[test]
    fn test_key_display() {
        assert_eq!(DispatchKey::new("verse", None).to_string(), "<verse>");
        assert_eq!(
            DispatchKey::new("kq", Some("sep-maqaf")).to_string(),
            "<kq class=\"sep-maqaf\">"
        );
    }
}
