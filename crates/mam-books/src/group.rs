//! Input file groups.
//!
//! The source ships one XML file per 24-book unit, so 1 and 2 Samuel are
//! read together from `1Sam2Sam.xml`.

use crate::book::{Book24, BookId};

/// One 24-book unit and the 39-book books it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookGroup {
    /// Concatenated OSIS abbreviations, e.g. `1Sam2Sam`. Also the input
    /// file stem.
    pub name: String,
    pub book24: Book24,
    /// Member books in canonical order.
    pub books: Vec<BookId>,
}

impl BookGroup {
    #[must_use]
    pub fn new(book24: Book24) -> Self {
        let books = BookId::of_book24(book24);
        let name = books.iter().map(|b| b.osis_abbrev()).collect();
        Self {
            name,
            book24,
            books,
        }
    }
}

/// Groups covering `books`, deduplicated in first-seen order.
#[must_use]
pub fn book_groups(books: &[BookId]) -> Vec<BookGroup> {
    let mut seen: Vec<Book24> = Vec::new();
    for book in books {
        let b24 = book.book24();
        if !seen.contains(&b24) {
            seen.push(b24);
        }
    }
    seen.into_iter().map(BookGroup::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_part_group_name() {
        let groups = book_groups(&[BookId::SecondSamuel]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "1Sam2Sam");
        assert_eq!(
            groups[0].books,
            vec![BookId::FirstSamuel, BookId::SecondSamuel]
        );
    }

    #[test]
    fn test_dedup_first_seen_order() {
        let groups = book_groups(&[
            BookId::Ruth,
            BookId::FirstKings,
            BookId::SecondKings,
            BookId::Ruth,
        ]);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ruth", "1Kgs2Kgs"]);
    }

    #[test]
    fn test_all_books_give_24_groups() {
        let groups = book_groups(&BookId::ALL);
        assert_eq!(groups.len(), 24);
        assert_eq!(groups[12].name, "HosJoelAmosObadJonahMicNahHabZephHagZechMal");
        assert_eq!(groups[22].name, "EzraNeh");
    }

    #[test]
    fn test_empty_selection() {
        assert!(book_groups(&[]).is_empty());
    }
}
