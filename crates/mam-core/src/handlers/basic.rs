//! Structural handlers: verses, text leaves and letter-size marks.

use mam_markup::{Markup, big, small, sup};
use mam_xml::SourceNode;

use super::{require_attr, spacing, unknown_value};
use crate::error::RenderError;
use crate::table::ChildOutput;

/// Verse contents followed by the end-of-verse paragraph marker, if any.
pub(super) fn verse(
    node: &SourceNode,
    mut ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    if let Some(sampe) = node.attr("ends-with-sampe") {
        let marker = match sampe {
            "samekh2" | "samekh3" => spacing::samekh_marker(),
            "pe2" | "pe3" => spacing::pe_marker(),
            other => return Err(unknown_value(node, "ends-with-sampe", other)),
        };
        ofc1.extend(marker);
    }
    Ok(ofc1)
}

pub(super) fn text(
    node: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![Markup::from(require_attr(node, "text")?)])
}

pub(super) fn empty(
    _: &SourceNode,
    _: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(Vec::new())
}

pub(super) fn pass_through(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(ofc1)
}

pub(super) fn letter_small(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![small(ofc1).into()])
}

pub(super) fn letter_large(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![big(ofc1).into()])
}

/// Hung (raised) letter.
pub(super) fn letter_hung(
    _: &SourceNode,
    ofc1: Vec<Markup>,
    _: &[ChildOutput<'_>],
) -> Result<Vec<Markup>, RenderError> {
    Ok(vec![sup(ofc1, None).into()])
}
