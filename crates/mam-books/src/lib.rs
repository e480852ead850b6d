//! Book identity and verse locales for the Hebrew Bible.
//!
//! - [`BookId`]: the 39 books in canonical order, with their 24-book
//!   grouping ([`Book24`]), [`Section`], short codes, OSIS abbreviation and
//!   Sefaria index title
//! - [`Bcvt`]: book/chapter/verse/tradition locale, parsed from OSIS ids
//! - [`book_groups`]: the 24-book processing units covering a book selection

mod book;
mod error;
mod group;
mod locale;
mod osis;

pub use book::{Book24, BookId, Section};
pub use error::LocaleError;
pub use group::{BookGroup, book_groups};
pub use locale::{Bcvt, Tradition};
pub use osis::{osis_id_to_locale, osis_id_to_locale_bc};
