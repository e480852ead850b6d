//! Paragraph markers, special spaces and paseq-like marks.

use mam_markup::chars::{MAQAF, NBSP, NUN_HAFUKHA, OCTO_NBSP, PASEQ, PE_MARK, SAMEKH_MARK, THSP};
use mam_markup::{Markup, bold, line_break, small, span_c};
use mam_xml::SourceNode;

use super::{text, unknown_value};
use crate::error::RenderError;
use crate::table::ChildOutput;

/// Open paragraph marker: `{ס}` followed by a wide gap.
pub(super) fn samekh_marker() -> Vec<Markup> {
    vec![
        text(NBSP),
        span_c(SAMEKH_MARK, "mam-spi-samekh").into(),
        text(OCTO_NBSP),
    ]
}

/// Closed paragraph marker: `{פ}` followed by a line break.
pub(super) fn pe_marker() -> Vec<Markup> {
    vec![
        text(NBSP),
        span_c(PE_MARK, "mam-spi-pe").into(),
        line_break().into(),
    ]
}

pub(super) fn samekh(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(samekh_marker())
}

/// The samekh next to the Numbers 10 inverted nuns shrinks to one space.
pub(super) fn samekh_beside_invnun(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![text(NBSP)])
}

pub(super) fn pe(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(pe_marker())
}

/// Inverted nun. The Psalm 107 ones carry their trailing space with them.
pub(super) fn invnun(
    node: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    let mut out = vec![span_c(NUN_HAFUKHA, "mam-spi-invnun").into()];
    match node.class() {
        None => {}
        Some("including-trailing-space") => out.push(text(NBSP)),
        Some(other) => return Err(unknown_value(node, "class", other)),
    }
    Ok(out)
}

pub(super) fn shirah_space(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![text(OCTO_NBSP)])
}

pub(super) fn legarmeih(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![text(THSP), bold(PASEQ).into()])
}

pub(super) fn paseq(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![text(THSP), small(PASEQ).into(), text(THSP)])
}

pub(super) fn implicit_maqaf(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![span_c(MAQAF, "mam-implicit-maqaf").into()])
}
