//! Scroll-difference notes.

use mam_markup::{Markup, italic, shrink, sup};
use mam_xml::SourceNode;

use super::{require_attr, require_children, text, unknown_value};
use crate::error::RenderError;
use crate::table::ChildOutput;

/// `scrdfftar`: a target word and its note, with the note placed before or
/// after the target according to `sdt-starpos`.
pub(super) fn scroll_difference(
    node: &SourceNode,
    _: Vec<Markup>,
    ofc2: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    require_children(node, ofc2, 2)?;
    let (target, note) = (&ofc2[0].output, &ofc2[1].output);
    let parts = match require_attr(node, "sdt-starpos")? {
        "before-word" => [note, target],
        "after-word" => [target, note],
        other => return Err(unknown_value(node, "sdt-starpos", other)),
    };
    Ok(parts.into_iter().flatten().cloned().collect())
}

/// `sdt-note`: asterisk marker plus the parenthesized note in italics.
pub(super) fn scroll_difference_note(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    let parenthesized = shrink(
        std::iter::once(text("("))
            .chain(ofc1)
            .chain(std::iter::once(text(")"))),
    );
    Ok(vec![
        sup("*", Some("footnote-marker")).into(),
        italic(parenthesized, Some("footnote")).into(),
    ])
}

/// Older `note` element: bare asterisk plus the note in italics.
pub(super) fn trailing_note(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![
        sup("*", None).into(),
        italic(ofc1, Some("footnote")).into(),
    ])
}
