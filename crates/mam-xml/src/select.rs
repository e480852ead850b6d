//! Verse selection for cantillation passes.

use crate::node::SourceNode;

/// Which verses of a book group a pass renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSelection {
    /// Every `verse` element.
    All,
    /// Only verses with a direct `cant-all-three` child, i.e. the verses
    /// that have separate lower and upper cantillation readings.
    WithCantAllThree,
}

/// Verses under `root` matching `selection`, in document order.
#[must_use]
pub fn select_verses(root: &SourceNode, selection: VerseSelection) -> Vec<&SourceNode> {
    let verses = root.descendants("verse");
    match selection {
        VerseSelection::All => verses,
        VerseSelection::WithCantAllThree => verses
            .into_iter()
            .filter(|v| v.has_child("cant-all-three"))
            .collect(),
    }
}
