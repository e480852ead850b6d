//! Verse locales.

use std::fmt;

use crate::book::{BookId, Section};
use crate::error::LocaleError;

/// Versification tradition.
///
/// `Mam` is the native versification of the source; `Sefaria` and `Bhs`
/// are the two renumbered input variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tradition {
    Mam,
    #[default]
    Sefaria,
    Bhs,
}

impl Tradition {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mam => "mam",
            Self::Sefaria => "sef",
            Self::Bhs => "bhs",
        }
    }

    /// Directory holding input XML in this versification, if any.
    #[must_use]
    pub fn input_dir_name(self) -> Option<&'static str> {
        match self {
            Self::Mam => None,
            Self::Sefaria => Some("xml-vtrad-sef"),
            Self::Bhs => Some("xml-vtrad-bhs"),
        }
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Book, chapter, verse and versification tradition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bcvt {
    book: BookId,
    chapter: u16,
    verse: u16,
    tradition: Tradition,
}

impl Bcvt {
    /// # Errors
    ///
    /// Returns [`LocaleError::NonPositive`] if chapter or verse is 0.
    pub fn new(
        book: BookId,
        chapter: u16,
        verse: u16,
        tradition: Tradition,
    ) -> Result<Self, LocaleError> {
        if chapter == 0 || verse == 0 {
            return Err(LocaleError::NonPositive { chapter, verse });
        }
        Ok(Self {
            book,
            chapter,
            verse,
            tradition,
        })
    }

    #[must_use]
    pub fn book(&self) -> BookId {
        self.book
    }

    #[must_use]
    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    #[must_use]
    pub fn verse(&self) -> u16 {
        self.verse
    }

    #[must_use]
    pub fn tradition(&self) -> Tradition {
        self.tradition
    }

    /// Whether this verse carries both lower and upper cantillation.
    ///
    /// The ranges are in MAM versification: Genesis 35:22, the Exodus
    /// decalogue (20:2-13) and the Deuteronomy decalogue (5:6-17).
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::NotMam`] for a locale in another tradition.
    pub fn has_dual_cantillation(&self) -> Result<bool, LocaleError> {
        if self.tradition != Tradition::Mam {
            return Err(LocaleError::NotMam(*self));
        }
        let (c, v) = (self.chapter, self.verse);
        Ok(match self.book {
            BookId::Genesis => c == 35 && v == 22,
            BookId::Exodus => c == 20 && (2..=13).contains(&v),
            BookId::Deuteronomy => c == 5 && (6..=17).contains(&v),
            _ => false,
        })
    }

    /// Whether this verse uses the poetic accent system: Psalms, Proverbs
    /// and Job except the prose frame of Job (1-2 and 42:7 onward).
    #[must_use]
    pub fn is_poetic_cantillation(&self) -> bool {
        if self.book.section() != Section::SifEm {
            return false;
        }
        if self.book != BookId::Job {
            return true;
        }
        let prose = self.chapter <= 2 || (self.chapter == 42 && self.verse >= 7);
        !prose
    }
}

impl fmt::Display for Bcvt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book.tbn(), self.chapter, self.verse)
    }
}
