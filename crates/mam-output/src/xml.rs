//! The rendered markup re-serialized as XML.
//!
//! A text leaf becomes `<text text="..."/>`; an element whose contents are
//! a single string carries that string in a `text` attribute instead of a
//! child.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use mam_core::{BookOutput, CantPass};
use mam_markup::Markup;

use crate::error::OutputError;

/// Render one book as `<book name>` with one `<verse osisID>` per verse.
///
/// Separate alef and bet readings follow their dual verse as extra
/// `<verse>` elements with a `cant` attribute.
///
/// # Errors
///
/// Returns [`OutputError::Xml`] if the XML writer fails.
pub fn render_xml(book: &BookOutput) -> Result<Vec<u8>, OutputError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root = BytesStart::new("book").with_attributes([("name", book.book.sefaria_name())]);
    emit(&mut writer, Event::Start(root))?;
    for verse in book.dual_verses() {
        let bcvt = &verse.bcvt;
        let osis_id = format!(
            "{}.{}.{}",
            bcvt.book().osis_abbrev(),
            bcvt.chapter(),
            bcvt.verse()
        );
        write_verse(&mut writer, &osis_id, None, &verse.body)?;
        for pass in [CantPass::Alef, CantPass::Bet] {
            if let Some(reading) = book.verse_in(pass, bcvt) {
                write_verse(&mut writer, &osis_id, Some(pass), &reading.body)?;
            }
        }
    }
    emit(&mut writer, Event::End(BytesEnd::new("book")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_verse(
    writer: &mut Writer<Vec<u8>>,
    osis_id: &str,
    pass: Option<CantPass>,
    body: &[Markup],
) -> Result<(), OutputError> {
    let mut start = BytesStart::new("verse").with_attributes([("osisID", osis_id)]);
    if let Some(pass) = pass {
        start.push_attribute(("cant", pass.label()));
    }
    if body.is_empty() {
        return emit(writer, Event::Empty(start));
    }
    emit(writer, Event::Start(start))?;
    for part in body {
        write_markup(writer, part)?;
    }
    emit(writer, Event::End(BytesEnd::new("verse")))
}

fn write_markup(writer: &mut Writer<Vec<u8>>, part: &Markup) -> Result<(), OutputError> {
    let el = match part {
        Markup::Text(text) => {
            let start = BytesStart::new("text").with_attributes([("text", text.as_str())]);
            return emit(writer, Event::Empty(start));
        }
        Markup::Element(el) => el,
    };

    let mut start = BytesStart::new(el.tag())
        .with_attributes(el.attrs().iter().map(|(k, v)| (k.as_str(), v.as_str())));
    if let Some(text) = el.sole_text() {
        start.push_attribute(("text", text));
        return emit(writer, Event::Empty(start));
    }
    if el.contents().is_empty() {
        return emit(writer, Event::Empty(start));
    }
    emit(writer, Event::Start(start))?;
    for child in el.contents() {
        write_markup(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(el.tag())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), OutputError> {
    writer
        .write_event(event)
        .map_err(|err| OutputError::Xml(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{book, dual_book, verse};
    use mam_books::BookId;
    use mam_markup::{italic, line_break, span_c, sup};

    fn render(output: &BookOutput) -> String {
        String::from_utf8(render_xml(output).unwrap()).unwrap()
    }

    #[test]
    fn test_root_and_verse_ids() {
        let output = book(
            BookId::FirstSamuel,
            vec![verse(BookId::FirstSamuel, 3, 4, vec![Markup::from("\u{05d0}")])],
        );
        let xml = render(&output);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<book name=\"I Samuel\">"));
        assert!(xml.contains("<verse osisID=\"1Sam.3.4\">"));
        assert!(xml.contains("<text text=\"\u{05d0}\"/>"));
        assert!(xml.trim_end().ends_with("</book>"));
    }

    #[test]
    fn test_sole_text_becomes_attribute() {
        let body = vec![
            span_c("{\u{05e1}}", "mam-spi-samekh").into(),
            line_break().into(),
        ];
        let xml = render(&book(BookId::Genesis, vec![verse(BookId::Genesis, 1, 5, body)]));

        assert!(xml.contains("<span class=\"mam-spi-samekh\" text=\"{\u{05e1}}\"/>"));
        assert!(xml.contains("<br/>"));
    }

    #[test]
    fn test_mixed_contents_nest() {
        let note = italic(
            vec![Markup::from("("), sup("*", None).into(), Markup::from(")")],
            Some("footnote"),
        );
        let xml = render(&book(
            BookId::Genesis,
            vec![verse(BookId::Genesis, 1, 1, vec![note.into()])],
        ));

        assert!(xml.contains("<i class=\"footnote\">"));
        assert!(xml.contains("<text text=\"(\"/>"));
        assert!(xml.contains("<sup text=\"*\"/>"));
        assert!(xml.contains("</i>"));
    }

    #[test]
    fn test_separate_readings_follow_dual_verse() {
        let xml = render(&dual_book());

        let dual = xml.find("<verse osisID=\"Exod.20.3\">").unwrap();
        let alef = xml
            .find("<verse osisID=\"Exod.20.3\" cant=\"rv-cant-alef\">")
            .unwrap();
        let bet = xml
            .find("<verse osisID=\"Exod.20.3\" cant=\"rv-cant-bet\">")
            .unwrap();
        assert!(dual < alef && alef < bet);
        assert!(!xml.contains("<verse osisID=\"Exod.20.2\" cant="));
    }
}
