//! The 39 books, their 24-book groups and their sections.

use std::fmt;

use crate::error::LocaleError;

/// One of the 39 books, in canonical (Tanakh) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookId {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    Isaiah,
    Jeremiah,
    Ezekiel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Tsefaniah,
    Haggai,
    Zechariah,
    Malachi,
    Psalms,
    Proverbs,
    Job,
    SongOfSongs,
    Ruth,
    Lamentations,
    Ecclesiastes,
    Esther,
    Daniel,
    Ezra,
    Nehemiah,
    FirstChronicles,
    SecondChronicles,
}

/// One of the 24 books of the traditional count.
///
/// Samuel, Kings, Chronicles, Ezra-Nehemiah and the Twelve each cover more
/// than one [`BookId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Book24 {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Samuel,
    Kings,
    Isaiah,
    Jeremiah,
    Ezekiel,
    TheTwelve,
    Psalms,
    Proverbs,
    Job,
    SongOfSongs,
    Ruth,
    Lamentations,
    Ecclesiastes,
    Esther,
    Daniel,
    EzraNehemiah,
    Chronicles,
}

/// One of the six sections used for `--section6` selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Torah.
    Torah,
    /// Former prophets.
    NevRish,
    /// Latter prophets.
    NevAh,
    /// Psalms, Proverbs, Job.
    SifEm,
    /// The five scrolls.
    HamMeg,
    /// Remaining writings.
    KetAh,
}

struct BookInfo {
    /// Name in the "tbn" convention, e.g. `1Samuel`.
    tbn: &'static str,
    book24: Book24,
    section: Section,
    /// Unordered short name, e.g. `G`, `1S`.
    short: &'static str,
    /// Ordered short name, e.g. `A1`, `BA`.
    ordered_short: &'static str,
    osis: &'static str,
    sefaria: &'static str,
}

macro_rules! book {
    ($tbn:literal, $b24:ident, $sec:ident, $short:literal, $ord:literal, $osis:literal, $sef:literal) => {
        BookInfo {
            tbn: $tbn,
            book24: Book24::$b24,
            section: Section::$sec,
            short: $short,
            ordered_short: $ord,
            osis: $osis,
            sefaria: $sef,
        }
    };
}

/// Indexed by `BookId as usize`.
#[rustfmt::skip]
const BOOKS: [BookInfo; 39] = [
    book!("Genesis", Genesis, Torah, "G", "A1", "Gen", "Genesis"),
    book!("Exodus", Exodus, Torah, "E", "A2", "Exod", "Exodus"),
    book!("Levit", Leviticus, Torah, "L", "A3", "Lev", "Leviticus"),
    book!("Numbers", Numbers, Torah, "N", "A4", "Num", "Numbers"),
    book!("Deuter", Deuteronomy, Torah, "D", "A5", "Deut", "Deuteronomy"),
    book!("Joshua", Joshua, NevRish, "Js", "B1", "Josh", "Joshua"),
    book!("Judges", Judges, NevRish, "Ju", "B2", "Judg", "Judges"),
    book!("1Samuel", Samuel, NevRish, "1S", "BA", "1Sam", "I Samuel"),
    book!("2Samuel", Samuel, NevRish, "2S", "BB", "2Sam", "II Samuel"),
    book!("1Kings", Kings, NevRish, "1K", "BC", "1Kgs", "I Kings"),
    book!("2Kings", Kings, NevRish, "2K", "BD", "2Kgs", "II Kings"),
    book!("Isaiah", Isaiah, NevAh, "I", "C1", "Isa", "Isaiah"),
    book!("Jeremiah", Jeremiah, NevAh, "Je", "C2", "Jer", "Jeremiah"),
    book!("Ezekiel", Ezekiel, NevAh, "Ee", "C3", "Ezek", "Ezekiel"),
    book!("Hosea", TheTwelve, NevAh, "Ho", "CA", "Hos", "Hosea"),
    book!("Joel", TheTwelve, NevAh, "Jl", "CB", "Joel", "Joel"),
    book!("Amos", TheTwelve, NevAh, "A", "CC", "Amos", "Amos"),
    book!("Obadiah", TheTwelve, NevAh, "O", "CD", "Obad", "Obadiah"),
    book!("Jonah", TheTwelve, NevAh, "Jn", "CE", "Jonah", "Jonah"),
    book!("Micah", TheTwelve, NevAh, "Mi", "CF", "Mic", "Micah"),
    book!("Nahum", TheTwelve, NevAh, "Na", "CG", "Nah", "Nahum"),
    book!("Habakkuk", TheTwelve, NevAh, "Hb", "CH", "Hab", "Habakkuk"),
    book!("Tsefaniah", TheTwelve, NevAh, "Ts", "CI", "Zeph", "Zephaniah"),
    book!("Haggai", TheTwelve, NevAh, "Hg", "CJ", "Hag", "Haggai"),
    book!("Zechariah", TheTwelve, NevAh, "Zc", "CK", "Zech", "Zechariah"),
    book!("Malachi", TheTwelve, NevAh, "Ma", "CL", "Mal", "Malachi"),
    book!("Psalms", Psalms, SifEm, "Ps", "D1", "Ps", "Psalms"),
    book!("Proverbs", Proverbs, SifEm, "Pr", "D2", "Prov", "Proverbs"),
    book!("Job", Job, SifEm, "Jb", "D3", "Job", "Job"),
    book!("Song of Songs", SongOfSongs, HamMeg, "S", "E1", "Song", "Song of Songs"),
    book!("Ruth", Ruth, HamMeg, "R", "E2", "Ruth", "Ruth"),
    book!("Lamentations", Lamentations, HamMeg, "La", "E3", "Lam", "Lamentations"),
    book!("Ecclesiastes", Ecclesiastes, HamMeg, "Ec", "E4", "Eccl", "Ecclesiastes"),
    book!("Esther", Esther, HamMeg, "Es", "E5", "Esth", "Esther"),
    book!("Daniel", Daniel, KetAh, "Da", "F1", "Dan", "Daniel"),
    book!("Ezra", EzraNehemiah, KetAh, "Er", "FA", "Ezra", "Ezra"),
    book!("Nehemiah", EzraNehemiah, KetAh, "Ne", "FB", "Neh", "Nehemiah"),
    book!("1Chronicles", Chronicles, KetAh, "1C", "FC", "1Chr", "I Chronicles"),
    book!("2Chronicles", Chronicles, KetAh, "2C", "FD", "2Chr", "II Chronicles"),
];

impl BookId {
    /// All 39 books in canonical order.
    pub const ALL: [Self; 39] = [
        Self::Genesis,
        Self::Exodus,
        Self::Leviticus,
        Self::Numbers,
        Self::Deuteronomy,
        Self::Joshua,
        Self::Judges,
        Self::FirstSamuel,
        Self::SecondSamuel,
        Self::FirstKings,
        Self::SecondKings,
        Self::Isaiah,
        Self::Jeremiah,
        Self::Ezekiel,
        Self::Hosea,
        Self::Joel,
        Self::Amos,
        Self::Obadiah,
        Self::Jonah,
        Self::Micah,
        Self::Nahum,
        Self::Habakkuk,
        Self::Tsefaniah,
        Self::Haggai,
        Self::Zechariah,
        Self::Malachi,
        Self::Psalms,
        Self::Proverbs,
        Self::Job,
        Self::SongOfSongs,
        Self::Ruth,
        Self::Lamentations,
        Self::Ecclesiastes,
        Self::Esther,
        Self::Daniel,
        Self::Ezra,
        Self::Nehemiah,
        Self::FirstChronicles,
        Self::SecondChronicles,
    ];

    fn info(self) -> &'static BookInfo {
        &BOOKS[self as usize]
    }

    /// Name in the `--book39` convention, e.g. `1Samuel`, `Levit`.
    #[must_use]
    pub fn tbn(self) -> &'static str {
        self.info().tbn
    }

    /// Look up a book by its `--book39` name.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnknownBookName`] for anything else.
    pub fn from_tbn(name: &str) -> Result<Self, LocaleError> {
        Self::ALL
            .into_iter()
            .find(|b| b.tbn() == name)
            .ok_or_else(|| LocaleError::UnknownBookName(name.to_owned()))
    }

    #[must_use]
    pub fn book24(self) -> Book24 {
        self.info().book24
    }

    #[must_use]
    pub fn section(self) -> Section {
        self.info().section
    }

    /// Unordered short name (1 or 2 characters), e.g. `G`, `Er`.
    #[must_use]
    pub fn short(self) -> &'static str {
        self.info().short
    }

    /// Ordered short name: section letter then an ordering character,
    /// e.g. `A1` for Genesis, `BA` for 1 Samuel. Sorts correctly under
    /// ASCII ordering (digits before letters).
    #[must_use]
    pub fn ordered_short(self) -> &'static str {
        self.info().ordered_short
    }

    /// OSIS abbreviation, e.g. `Gen`, `1Sam`.
    #[must_use]
    pub fn osis_abbrev(self) -> &'static str {
        self.info().osis
    }

    /// Sefaria index title, e.g. `I Samuel`.
    #[must_use]
    pub fn sefaria_name(self) -> &'static str {
        self.info().sefaria
    }

    /// For the first part of a two-part book, the second part.
    #[must_use]
    pub fn part2(self) -> Option<Self> {
        match self {
            Self::FirstSamuel => Some(Self::SecondSamuel),
            Self::FirstKings => Some(Self::SecondKings),
            Self::FirstChronicles => Some(Self::SecondChronicles),
            Self::Ezra => Some(Self::Nehemiah),
            _ => None,
        }
    }

    /// Books of one section, in canonical order.
    #[must_use]
    pub fn of_section(section: Section) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|b| b.section() == section)
            .collect()
    }

    /// Books of one 24-book group, in canonical order.
    #[must_use]
    pub fn of_book24(book24: Book24) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|b| b.book24() == book24)
            .collect()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tbn())
    }
}

impl Book24 {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Samuel => "Samuel",
            Self::Kings => "Kings",
            Self::TheTwelve => "The-12-Minor-Prophets",
            Self::EzraNehemiah => "Ezra-Neḥemiah",
            Self::Chronicles => "Chronicles",
            // Single-book groups share the name of their only book.
            _ => BookId::ALL
                .into_iter()
                .find(|b| b.book24() == self)
                .map_or("", BookId::tbn),
        }
    }
}

impl Section {
    /// All sections in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Torah,
        Self::NevRish,
        Self::NevAh,
        Self::SifEm,
        Self::HamMeg,
        Self::KetAh,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Torah => "Torah",
            Self::NevRish => "NevRish",
            Self::NevAh => "NevAḥ",
            Self::SifEm => "SifEm",
            Self::HamMeg => "ḤamMeg",
            Self::KetAh => "KetAḥ",
        }
    }

    /// Section letter, `A` through `F`.
    #[must_use]
    pub fn ordered_short(self) -> char {
        match self {
            Self::Torah => 'A',
            Self::NevRish => 'B',
            Self::NevAh => 'C',
            Self::SifEm => 'D',
            Self::HamMeg => 'E',
            Self::KetAh => 'F',
        }
    }

    /// Parse a section name. The dotted-h spellings and their plain ASCII
    /// forms (`NevAh`, `HamMeg`, `KetAh`) are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnknownSection`] for anything else.
    pub fn from_name(name: &str) -> Result<Self, LocaleError> {
        let ascii = name.replace('ḥ', "h").replace('Ḥ', "H");
        Self::ALL
            .into_iter()
            .find(|s| s.name().replace('ḥ', "h").replace('Ḥ', "H") == ascii)
            .ok_or_else(|| LocaleError::UnknownSection(name.to_owned()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, book) in BookId::ALL.into_iter().enumerate() {
            assert_eq!(book as usize, i);
        }
    }

    #[test]
    fn test_shorts_are_unique() {
        let shorts: HashSet<_> = BookId::ALL.into_iter().map(BookId::short).collect();
        assert_eq!(shorts.len(), 39);
        let ordered: HashSet<_> = BookId::ALL.into_iter().map(BookId::ordered_short).collect();
        assert_eq!(ordered.len(), 39);
    }

    #[test]
    fn test_ordered_shorts_sort_canonically() {
        let mut sorted: Vec<_> = BookId::ALL.to_vec();
        sorted.sort_by_key(|b| b.ordered_short());
        assert_eq!(sorted, BookId::ALL.to_vec());
    }

    #[test]
    fn test_ordered_short_starts_with_section_letter() {
        for book in BookId::ALL {
            assert!(book.ordered_short().starts_with(book.section().ordered_short()));
        }
    }

    #[test]
    fn test_from_tbn() {
        assert_eq!(BookId::from_tbn("1Samuel").unwrap(), BookId::FirstSamuel);
        assert_eq!(BookId::from_tbn("Levit").unwrap(), BookId::Leviticus);
        assert!(matches!(
            BookId::from_tbn("I Samuel"),
            Err(LocaleError::UnknownBookName(_))
        ));
    }

    #[test]
    fn test_book24_groups() {
        assert_eq!(
            BookId::of_book24(Book24::Samuel),
            vec![BookId::FirstSamuel, BookId::SecondSamuel]
        );
        assert_eq!(BookId::of_book24(Book24::TheTwelve).len(), 12);
        assert_eq!(Book24::Genesis.name(), "Genesis");
        assert_eq!(Book24::EzraNehemiah.name(), "Ezra-Neḥemiah");
    }

    #[test]
    fn test_sections() {
        assert_eq!(
            BookId::of_section(Section::SifEm),
            vec![BookId::Psalms, BookId::Proverbs, BookId::Job]
        );
        let total: usize = Section::ALL
            .into_iter()
            .map(|s| BookId::of_section(s).len())
            .sum();
        assert_eq!(total, 39);
    }

    #[test]
    fn test_section_from_name_accepts_ascii() {
        assert_eq!(Section::from_name("NevAḥ").unwrap(), Section::NevAh);
        assert_eq!(Section::from_name("NevAh").unwrap(), Section::NevAh);
        assert_eq!(Section::from_name("HamMeg").unwrap(), Section::HamMeg);
        assert!(Section::from_name("Writings").is_err());
    }

    #[test]
    fn test_part2() {
        assert_eq!(BookId::Ezra.part2(), Some(BookId::Nehemiah));
        assert_eq!(BookId::Genesis.part2(), None);
    }
}
