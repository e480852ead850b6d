//! `mam books` command implementation.

use clap::Args;
use mam_books::{BookId, Section};

use super::selected_books;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the books command.
#[derive(Args)]
pub(crate) struct BooksArgs {
    /// Only list one section.
    #[arg(long)]
    section6: Option<String>,
}

impl BooksArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let books = selected_books(None, self.section6.as_deref())?;
        let mut section: Option<Section> = None;
        for book in books {
            if section != Some(book.section()) {
                section = Some(book.section());
                output.highlight(book.section().name());
            }
            output.info(&book_line(book));
        }
        Ok(())
    }
}

/// `A1  Genesis  Gen  Genesis` style listing line.
fn book_line(book: BookId) -> String {
    format!(
        "  {:<3} {:<14} {:<6} {}",
        book.ordered_short(),
        book.tbn(),
        book.osis_abbrev(),
        book.sefaria_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_book_line() {
        assert_eq!(
            book_line(BookId::FirstSamuel),
            "  BA  1Samuel        1Sam   I Samuel"
        );
    }
}
