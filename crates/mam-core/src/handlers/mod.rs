//! Handlers for the MAM-XML element vocabulary and the standard table.

mod basic;
mod kq;
mod notes;
mod spacing;

use mam_markup::Markup;
use mam_xml::SourceNode;

use crate::error::RenderError;
use crate::options::{CantPass, HandlerOptions, KetivMaqaf, NoteStyle};
use crate::table::{ChildOutput, Handler, HandlerTable};

/// The handler table for one cantillation pass under the given options.
#[must_use]
pub fn standard_table(pass: CantPass, options: &HandlerOptions) -> HandlerTable {
    let mut table = HandlerTable::new()
        .with("verse", None, basic::verse)
        .with("text", None, basic::text)
        .with("good-ending", None, basic::empty)
        .with("letter-small", None, basic::letter_small)
        .with("letter-large", None, basic::letter_large)
        .with("letter-hung", None, basic::letter_hung)
        .with("slh-word", None, basic::pass_through)
        // ketiv/qere
        .with("kq", None, kq::ketiv_qere)
        .with("kq", Some("sep-maqaf"), kq::ketiv_qere)
        .with("kq-k", None, kq::ketiv)
        .with("kq-k-velo-q", None, kq::ketiv)
        .with("kq-q", None, kq::qere)
        .with("kq-q-velo-k", None, kq::qere)
        .with("kq-trivial", None, kq::trivial)
        // spacing and layout marks
        .with("spi-samekh2", None, spacing::samekh)
        .with("spi-samekh3", None, spacing::samekh)
        .with("spi-samekh3", Some("nu10-invnun-neighbor"), spacing::samekh_beside_invnun)
        .with("spi-pe2", None, spacing::pe)
        .with("spi-pe3", None, spacing::pe)
        .with("spi-invnun", None, spacing::invnun)
        .with("spi-invnun", Some("including-trailing-space"), spacing::invnun)
        .with("shirah-space", None, spacing::shirah_space)
        .with("lp-legarmeih", None, spacing::legarmeih)
        .with("lp-paseq", None, spacing::paseq)
        .with("implicit-maqaf", None, spacing::implicit_maqaf);

    let append_maqaf: Handler = match options.ketiv_maqaf {
        KetivMaqaf::AfterBracket => kq::ketiv_maqaf_after,
        KetivMaqaf::BeforeBracket => kq::ketiv_maqaf_before,
    };
    table.insert("kq-k-velo-q", Some("append-maqaf"), append_maqaf);

    match options.note_style {
        NoteStyle::TargetRelative => {
            table.insert("scrdfftar", None, notes::scroll_difference);
            table.insert("sdt-target", None, basic::pass_through);
            table.insert("sdt-note", None, notes::scroll_difference_note);
        }
        NoteStyle::Trailing => table.insert("note", None, notes::trailing_note),
    }

    let (combined, alef, bet): (Handler, Handler, Handler) = match pass {
        CantPass::Dual => (basic::pass_through, basic::empty, basic::empty),
        CantPass::Alef => (basic::empty, basic::pass_through, basic::empty),
        CantPass::Bet => (basic::empty, basic::empty, basic::pass_through),
    };
    table.insert("cant-all-three", None, basic::pass_through);
    table.insert("cant-combined", None, combined);
    table.insert("cant-alef", None, alef);
    table.insert("cant-bet", None, bet);

    table
}

fn require_children(
    node: &SourceNode,
    ofc2: &[ChildOutput<'_>],
    expected: usize,
) -> Result<(), RenderError> {
    if ofc2.len() == expected {
        Ok(())
    } else {
        Err(RenderError::ChildCount {
            tag: node.tag.clone(),
            expected,
            found: ofc2.len(),
        })
    }
}

fn require_attr<'a>(node: &'a SourceNode, attr: &'static str) -> Result<&'a str, RenderError> {
    node.attr(attr).ok_or_else(|| RenderError::MissingAttribute {
        tag: node.tag.clone(),
        attr,
    })
}

fn unknown_value(node: &SourceNode, attr: &'static str, value: &str) -> RenderError {
    RenderError::UnknownAttributeValue {
        tag: node.tag.clone(),
        attr,
        value: value.to_owned(),
    }
}

fn text(s: &str) -> Markup {
    Markup::from(s)
}
