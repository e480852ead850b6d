//! Sefaria import CSV.

use mam_books::BookId;
use mam_core::{BookOutput, CantPass};
use mam_markup::HtmlWriter;

use crate::error::OutputError;

const VERSION_TITLE: &str = "Miqra according to the Masorah";
const VERSION_SOURCE: &str = "https://en.wikisource.org/wiki/User:Dovi/Miqra_according_to_the_Masorah";

/// Key/value rows Sefaria expects before the verse rows.
#[must_use]
pub fn sefaria_header(book: BookId) -> [(&'static str, &'static str); 5] {
    [
        ("Index Title", book.sefaria_name()),
        ("Version Title", VERSION_TITLE),
        ("Language", "he"),
        ("Version Source", VERSION_SOURCE),
        ("Version Notes", ""),
    ]
}

/// Render one book as Sefaria CSV.
///
/// One row per verse of the dual pass: `"{Sefaria name} {ch}:{v}"` and the
/// verse HTML. With `include_ab_cantillation` each row also carries the
/// alef and bet renderings, empty where the verse has no separate reading.
/// Cells never get `<wbr>`.
///
/// # Errors
///
/// Returns [`OutputError::Csv`] if the CSV writer fails.
pub fn render_csv(
    book: &BookOutput,
    include_header: bool,
    include_ab_cantillation: bool,
) -> Result<Vec<u8>, OutputError> {
    let html = HtmlWriter::new();
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    if include_header {
        for (key, value) in sefaria_header(book.book) {
            writer.write_record([key, value])?;
        }
    }

    let name = book.book.sefaria_name();
    for verse in book.dual_verses() {
        let bcvt = &verse.bcvt;
        let mut row = vec![
            format!("{name} {}:{}", bcvt.chapter(), bcvt.verse()),
            html.render(&verse.body),
        ];
        if include_ab_cantillation {
            for pass in [CantPass::Alef, CantPass::Bet] {
                let cell = book
                    .verse_in(pass, bcvt)
                    .map(|v| html.render(&v.body))
                    .unwrap_or_default();
                row.push(cell);
            }
        }
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|err| OutputError::Csv(err.into_error().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{book, dual_book, verse};
    use mam_markup::{Markup, span_c};
    use pretty_assertions::assert_eq;

    fn render(output: &BookOutput, header: bool, ab: bool) -> String {
        String::from_utf8(render_csv(output, header, ab).unwrap()).unwrap()
    }

    #[test]
    fn test_header_rows() {
        let output = book(BookId::FirstSamuel, Vec::new());

        assert_eq!(
            render(&output, true, false),
            "Index Title,I Samuel\r\n\
             Version Title,Miqra according to the Masorah\r\n\
             Language,he\r\n\
             Version Source,https://en.wikisource.org/wiki/User:Dovi/Miqra_according_to_the_Masorah\r\n\
             Version Notes,\r\n"
        );
    }

    #[test]
    fn test_verse_rows_without_header() {
        let output = book(
            BookId::FirstSamuel,
            vec![
                verse(BookId::FirstSamuel, 1, 1, vec![Markup::from("\u{05d5}\u{a0}")]),
                verse(
                    BookId::FirstSamuel,
                    1,
                    2,
                    vec![span_c("{\u{05e4}}", "mam-spi-pe").into()],
                ),
            ],
        );

        assert_eq!(
            render(&output, false, false),
            "I Samuel 1:1,\u{05d5}&nbsp;\r\n\
             I Samuel 1:2,\"<span class=\"\"mam-spi-pe\"\">{\u{05e4}}</span>\"\r\n"
        );
    }

    #[test]
    fn test_maqaf_gets_no_wbr() {
        let output = book(
            BookId::Genesis,
            vec![verse(BookId::Genesis, 1, 1, vec![Markup::from("\u{05d0}\u{05be}\u{05d1}")])],
        );
        assert_eq!(
            render(&output, false, false),
            "Genesis 1:1,\u{05d0}\u{05be}\u{05d1}\r\n"
        );
    }

    #[test]
    fn test_ab_cells_empty_when_verse_has_one_reading() {
        assert_eq!(
            render(&dual_book(), false, true),
            "Exodus 20:2,\u{05d3},,\r\n\
             Exodus 20:3,\u{05d0},\u{05d1},\u{05d2}\r\n"
        );
    }

    #[test]
    fn test_ab_cells_omitted_when_not_requested() {
        assert_eq!(
            render(&dual_book(), false, false),
            "Exodus 20:2,\u{05d3}\r\n\
             Exodus 20:3,\u{05d0}\r\n"
        );
    }
}
