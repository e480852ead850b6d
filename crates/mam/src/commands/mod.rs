//! CLI command implementations.

pub(crate) mod books;
pub(crate) mod convert;

pub(crate) use books::BooksArgs;
pub(crate) use convert::ConvertArgs;

use mam_books::{BookId, LocaleError, Section};

/// Books named by `--book39` / `--section6`; all 39 when neither is given.
pub(crate) fn selected_books(
    book39: Option<&str>,
    section6: Option<&str>,
) -> Result<Vec<BookId>, LocaleError> {
    match (book39, section6) {
        (Some(name), _) => Ok(vec![BookId::from_tbn(name)?]),
        (None, Some(name)) => Ok(BookId::of_section(Section::from_name(name)?)),
        (None, None) => Ok(BookId::ALL.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selected_single_book() {
        assert_eq!(
            selected_books(Some("2Samuel"), None).unwrap(),
            vec![BookId::SecondSamuel]
        );
    }

    #[test]
    fn test_selected_section() {
        let books = selected_books(None, Some("Torah")).unwrap();
        assert_eq!(books.len(), 5);
        assert_eq!(books[4], BookId::Deuteronomy);
    }

    #[test]
    fn test_selected_default_is_everything() {
        assert_eq!(selected_books(None, None).unwrap().len(), 39);
    }

    #[test]
    fn test_selected_unknown_book() {
        assert!(matches!(
            selected_books(Some("Maccabees"), None),
            Err(LocaleError::UnknownBookName(_))
        ));
    }
}
