//! Ketiv/qere handlers.
//!
//! The written form (ketiv) is shown in parentheses, the read form (qere)
//! in square brackets. Bracket strings stay separate leaves inside the span.

use mam_markup::chars::MAQAF;
use mam_markup::{Markup, span_c};
use mam_xml::SourceNode;

use super::{require_children, text, unknown_value};
use crate::error::RenderError;
use crate::table::ChildOutput;

/// A `kq` pair: ketiv and qere joined by a space, or by a maqaf under
/// `class="sep-maqaf"`.
pub(super) fn ketiv_qere(
    node: &SourceNode,
    _: Vec<Markup>,
    ofc2: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    require_children(node, ofc2, 2)?;
    let separator = match node.class() {
        None => " ",
        Some("sep-maqaf") => MAQAF,
        Some(other) => return Err(unknown_value(node, "class", other)),
    };
    let mut inside = ofc2[0].output.clone();
    inside.push(text(separator));
    inside.extend(ofc2[1].output.iter().cloned());
    Ok(vec![span_c(inside, "mam-kq").into()])
}

pub(super) fn ketiv(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![bracketed("mam-kq-k", "(", ofc1, ")")])
}

/// Ketiv with no qere whose maqaf belongs to the next word: `(...)־`.
pub(super) fn ketiv_maqaf_after(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    let close = format!("){MAQAF}");
    Ok(vec![bracketed("mam-kq-k", "(", ofc1, &close)])
}

/// As [`ketiv_maqaf_after`] but with the maqaf inside: `(...־)`.
pub(super) fn ketiv_maqaf_before(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    let close = format!("{MAQAF})");
    Ok(vec![bracketed("mam-kq-k", "(", ofc1, &close)])
}

pub(super) fn qere(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![bracketed("mam-kq-q", "[", ofc1, "]")])
}

/// Ketiv and qere differ only trivially; show the text unbracketed.
pub(super) fn trivial(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![span_c(ofc1, "mam-kq-trivial").into()])
}

fn bracketed(class: &str, open: &str, ofc1: Vec<Markup>, close: &str) -> Markup {
    let mut inside = Vec::with_capacity(ofc1.len() + 2);
    inside.push(text(open));
    inside.extend(ofc1);
    inside.push(text(close));
    span_c(inside, class).into()
}
