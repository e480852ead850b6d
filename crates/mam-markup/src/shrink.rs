//! Adjacent-text coalescing.
//!
//! Handlers emit fragments like `[NBSP, <span>, NBSP x 8]` without caring
//! whether a neighbor handler also emitted text. [`shrink`] merges every run
//! of adjacent text leaves into one and drops empty ones, so that a single
//! text run in the final rendering is never split across leaves. Elements
//! are opaque: text is never merged into or out of them.

use crate::node::Markup;

/// Coalesce adjacent text leaves and drop empty ones.
///
/// Idempotent: `shrink(shrink(x)) == shrink(x)`.
pub fn shrink(parts: impl IntoIterator<Item = Markup>) -> Vec<Markup> {
    let mut acc = Vec::new();
    for part in parts {
        push_shrunk(&mut acc, part);
    }
    acc
}

/// Append `part` to an already-shrunk sequence, keeping it shrunk.
pub fn push_shrunk(acc: &mut Vec<Markup>, part: Markup) {
    match part {
        Markup::Text(text) if text.is_empty() => {}
        Markup::Text(text) => match acc.last_mut() {
            Some(Markup::Text(last)) => last.push_str(&text),
            _ => acc.push(Markup::Text(text)),
        },
        el @ Markup::Element(_) => acc.push(el),
    }
}
