//! Post-order tree rewrite driven by the handler table.

use mam_markup::{Markup, push_shrunk, shrink};
use mam_xml::SourceNode;

use crate::error::RenderError;
use crate::handlers::standard_table;
use crate::options::{CantPass, HandlerOptions};
use crate::table::{ChildOutput, DispatchKey, HandlerTable};

/// Renders source elements with a fixed handler table.
#[derive(Debug, Clone)]
pub struct Renderer {
    table: HandlerTable,
}

impl Renderer {
    #[must_use]
    pub fn new(table: HandlerTable) -> Self {
        Self { table }
    }

    /// Renderer with the standard table for `pass`.
    #[must_use]
    pub fn for_pass(pass: CantPass, options: &HandlerOptions) -> Self {
        Self::new(standard_table(pass, options))
    }

    /// Render `node` and everything below it.
    ///
    /// Children are rendered first. Their outputs are concatenated and
    /// shrunk into `ofc1`, or replaced by the node's `text` payload; the
    /// handler for `(tag, class)` then maps `ofc1` and the per-child outputs
    /// to the node's output, which is shrunk again.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DispatchMiss`] for an unregistered key,
    /// [`RenderError::TextWithChildren`] for a `text` payload alongside
    /// non-empty child output, or whatever the handler reports.
    pub fn render(&self, node: &SourceNode) -> Result<Vec<Markup>, RenderError> {
        let mut ofc1 = Vec::new();
        let mut ofc2 = Vec::with_capacity(node.children.len());
        for child in &node.children {
            let output = self.render(child)?;
            for part in &output {
                push_shrunk(&mut ofc1, part.clone());
            }
            ofc2.push(ChildOutput {
                node: child,
                output,
            });
        }

        if let Some(payload) = node.text_payload() {
            if !ofc1.is_empty() {
                return Err(RenderError::TextWithChildren {
                    tag: node.tag.clone(),
                });
            }
            ofc1 = vec![Markup::from(payload)];
        }

        let key = DispatchKey::of(node);
        let handler = self
            .table
            .get(&key)
            .ok_or(RenderError::DispatchMiss(key))?;
        Ok(shrink(handler(node, ofc1, &ofc2)?))
    }
}
