//! Book-group processing: render the selected verses of a parsed group
//! file and split them by book.

use std::collections::BTreeMap;

use mam_books::{Bcvt, BookId, Tradition, osis_id_to_locale};
use mam_markup::Markup;
use mam_xml::{SourceNode, select_verses};

use crate::engine::Renderer;
use crate::error::RenderError;
use crate::options::{CantPass, HandlerOptions};

/// One rendered verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedVerse {
    pub bcvt: Bcvt,
    pub body: Vec<Markup>,
}

/// All passes rendered for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOutput {
    pub book: BookId,
    pub passes: BTreeMap<CantPass, Vec<RenderedVerse>>,
}

impl BookOutput {
    /// Verses of the dual pass, which covers every verse of the book.
    #[must_use]
    pub fn dual_verses(&self) -> &[RenderedVerse] {
        self.passes
            .get(&CantPass::Dual)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rendering of `bcvt` in `pass`, if that pass covers the verse.
    #[must_use]
    pub fn verse_in(&self, pass: CantPass, bcvt: &Bcvt) -> Option<&RenderedVerse> {
        self.passes.get(&pass)?.iter().find(|v| v.bcvt == *bcvt)
    }
}

/// Render the verses of `root` selected by `pass`, grouped by book.
///
/// # Errors
///
/// Fails on a verse without an `osisID`, an unparseable `osisID`, or any
/// rendering error.
pub fn process_book_group(
    root: &SourceNode,
    tradition: Tradition,
    pass: CantPass,
    renderer: &Renderer,
) -> Result<BTreeMap<BookId, Vec<RenderedVerse>>, RenderError> {
    let mut books: BTreeMap<BookId, Vec<RenderedVerse>> = BTreeMap::new();
    for verse in select_verses(root, pass.selection()) {
        let osis_id = verse.osis_id().ok_or_else(|| RenderError::MissingAttribute {
            tag: verse.tag.clone(),
            attr: "osisID",
        })?;
        let bcvt = osis_id_to_locale(osis_id, tradition)?;
        let body = renderer.render(verse)?;
        books.entry(bcvt.book()).or_default().push(RenderedVerse { bcvt, body });
    }
    tracing::debug!(
        pass = %pass,
        books = books.len(),
        verses = books.values().map(Vec::len).sum::<usize>(),
        "Rendered book group"
    );
    Ok(books)
}

/// Run the dual pass, plus the alef and bet passes when requested, and
/// merge the results per book in canonical order.
///
/// # Errors
///
/// As [`process_book_group`].
pub fn process_all_passes(
    root: &SourceNode,
    tradition: Tradition,
    include_ab_cantillation: bool,
    options: &HandlerOptions,
) -> Result<Vec<BookOutput>, RenderError> {
    let passes: &[CantPass] = if include_ab_cantillation {
        &CantPass::ALL
    } else {
        &[CantPass::Dual]
    };
    let mut merged: BTreeMap<BookId, BookOutput> = BTreeMap::new();
    for &pass in passes {
        let renderer = Renderer::for_pass(pass, options);
        for (book, verses) in process_book_group(root, tradition, pass, &renderer)? {
            merged
                .entry(book)
                .or_insert_with(|| BookOutput {
                    book,
                    passes: BTreeMap::new(),
                })
                .passes
                .insert(pass, verses);
        }
    }
    Ok(merged.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mam_books::LocaleError;
    use pretty_assertions::assert_eq;

    fn verse(osis_id: &str, children: Vec<SourceNode>) -> SourceNode {
        SourceNode::new("verse")
            .with_attr("osisID", osis_id)
            .with_children(children)
    }

    fn dual_three() -> SourceNode {
        SourceNode::new("cant-all-three").with_children([
            SourceNode::new("cant-alef").with_child(SourceNode::text("A")),
            SourceNode::new("cant-bet").with_child(SourceNode::text("B")),
            SourceNode::new("cant-combined").with_child(SourceNode::text("C")),
        ])
    }

    fn samuel_group() -> SourceNode {
        SourceNode::new("book").with_children([
            verse("1Sam.1.1", vec![SourceNode::text("a")]),
            verse("1Sam.1.2", vec![SourceNode::text("b")]),
            verse("2Sam.1.1", vec![SourceNode::text("c")]),
        ])
    }

    #[test]
    fn test_group_split_by_book() {
        let renderer = Renderer::for_pass(CantPass::Dual, &HandlerOptions::default());
        let books =
            process_book_group(&samuel_group(), Tradition::Sefaria, CantPass::Dual, &renderer)
                .unwrap();
        assert_eq!(
            books.keys().copied().collect::<Vec<_>>(),
            vec![BookId::FirstSamuel, BookId::SecondSamuel]
        );
        let first = &books[&BookId::FirstSamuel];
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].bcvt.verse(), 2);
        assert_eq!(first[1].body, vec![Markup::from("b")]);
        assert_eq!(first[0].bcvt.tradition(), Tradition::Sefaria);
    }

    #[test]
    fn test_alef_pass_selects_dual_verses_only() {
        let root = SourceNode::new("book").with_children([
            verse("Exod.20.1", vec![SourceNode::text("x")]),
            verse("Exod.20.2", vec![dual_three()]),
        ]);
        let renderer = Renderer::for_pass(CantPass::Alef, &HandlerOptions::default());
        let books = process_book_group(&root, Tradition::Bhs, CantPass::Alef, &renderer).unwrap();
        let verses = &books[&BookId::Exodus];
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].bcvt.verse(), 2);
        assert_eq!(verses[0].body, vec![Markup::from("A")]);
    }

    #[test]
    fn test_all_passes_merged() {
        let root = SourceNode::new("book").with_children([
            verse("Exod.20.1", vec![SourceNode::text("x")]),
            verse("Exod.20.2", vec![dual_three()]),
        ]);
        let out =
            process_all_passes(&root, Tradition::Sefaria, true, &HandlerOptions::default()).unwrap();
        assert_eq!(out.len(), 1);
        let book = &out[0];
        assert_eq!(book.book, BookId::Exodus);
        assert_eq!(book.dual_verses().len(), 2);
        let bcvt = book.dual_verses()[1].bcvt;
        assert_eq!(
            book.verse_in(CantPass::Bet, &bcvt).map(|v| v.body.clone()),
            Some(vec![Markup::from("B")])
        );
        assert!(book.verse_in(CantPass::Bet, &book.dual_verses()[0].bcvt).is_none());
    }

    #[test]
    fn test_dual_only_when_ab_not_requested() {
        let out = process_all_passes(
            &samuel_group(),
            Tradition::Sefaria,
            false,
            &HandlerOptions::default(),
        )
        .unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|b| b.passes.len() == 1));
    }

    #[test]
    fn test_missing_osis_id() {
        let root = SourceNode::new("book").with_child(SourceNode::new("verse"));
        let renderer = Renderer::for_pass(CantPass::Dual, &HandlerOptions::default());
        assert!(matches!(
            process_book_group(&root, Tradition::Sefaria, CantPass::Dual, &renderer),
            Err(RenderError::MissingAttribute { attr: "osisID", .. })
        ));
    }

    #[test]
    fn test_bad_osis_id() {
        let root = SourceNode::new("book").with_child(verse("Foo.1.1", vec![]));
        let renderer = Renderer::for_pass(CantPass::Dual, &HandlerOptions::default());
        assert!(matches!(
            process_book_group(&root, Tradition::Sefaria, CantPass::Dual, &renderer),
            Err(RenderError::Locale(LocaleError::UnknownOsisAbbrev(_)))
        ));
    }
}
