//! Rendered books shared by the writer tests.

use std::collections::BTreeMap;

use mam_books::{Bcvt, BookId, Tradition};
use mam_core::{BookOutput, CantPass, RenderedVerse};
use mam_markup::Markup;

pub(crate) fn verse(book: BookId, chapter: u16, verse: u16, body: Vec<Markup>) -> RenderedVerse {
    RenderedVerse {
        bcvt: Bcvt::new(book, chapter, verse, Tradition::Sefaria).unwrap(),
        body,
    }
}

/// Book with only a dual pass.
pub(crate) fn book(id: BookId, verses: Vec<RenderedVerse>) -> BookOutput {
    BookOutput {
        book: id,
        passes: BTreeMap::from([(CantPass::Dual, verses)]),
    }
}

/// Exodus 20:2-3 where only 20:3 has separate alef and bet readings.
pub(crate) fn dual_book() -> BookOutput {
    let text = |s: &str| vec![Markup::from(s)];
    BookOutput {
        book: BookId::Exodus,
        passes: BTreeMap::from([
            (
                CantPass::Dual,
                vec![
                    verse(BookId::Exodus, 20, 2, text("\u{05d3}")),
                    verse(BookId::Exodus, 20, 3, text("\u{05d0}")),
                ],
            ),
            (CantPass::Alef, vec![verse(BookId::Exodus, 20, 3, text("\u{05d1}"))]),
            (CantPass::Bet, vec![verse(BookId::Exodus, 20, 3, text("\u{05d2}"))]),
        ]),
    }
}
