//! Standalone HTML document per book.

use mam_core::BookOutput;
use mam_markup::{HtmlWriter, Markup, document, para, span_c};

const STYLE: &str = "body { direction: rtl; font-size: 1.4em; }\n\
.mam-vn { font-size: 0.6em; color: gray; }\n\
.mam-kq-k, .footnote { color: gray; }";

/// Render the dual pass of one book as an HTML document: one paragraph per
/// verse, led by its chapter and verse number.
#[must_use]
pub fn render_html(book: &BookOutput, add_wbr: bool) -> String {
    let body: Vec<Markup> = book
        .dual_verses()
        .iter()
        .map(|verse| {
            let label = format!("{}:{}", verse.bcvt.chapter(), verse.bcvt.verse());
            let mut contents = vec![span_c(label, "mam-vn").into(), Markup::from(" ")];
            contents.extend(verse.body.iter().cloned());
            para(contents).into()
        })
        .collect();
    let doc = document(book.book.sefaria_name(), body, Some(STYLE));
    HtmlWriter::new().with_wbr(add_wbr).render_document(&doc)
}
