//! Lookup errors.

use crate::locale::Bcvt;

/// Error looking up a book, section or verse locale.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LocaleError {
    /// The identifier is not of the form `Book.Chapter.Verse`.
    #[error("malformed OSIS id: {0:?}")]
    BadOsisId(String),

    /// The book part of an OSIS id is not a known abbreviation.
    #[error("unknown OSIS book abbreviation: {0:?}")]
    UnknownOsisAbbrev(String),

    /// Not one of the 39 book names (e.g. `1Samuel`).
    #[error("unknown book name: {0:?}")]
    UnknownBookName(String),

    /// Not one of the six section names (e.g. `SifEm`).
    #[error("unknown section name: {0:?}")]
    UnknownSection(String),

    /// Chapter and verse numbers start at 1.
    #[error("chapter and verse must be positive, got {chapter}:{verse}")]
    NonPositive {
        /// Chapter number as given.
        chapter: u16,
        /// Verse number as given.
        verse: u16,
    },

    /// The query is only defined in MAM versification.
    #[error("{0} ({tradition}) is not in MAM versification", tradition = .0.tradition())]
    NotMam(Bcvt),
}
