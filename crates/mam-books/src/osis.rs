//! OSIS verse identifiers (`Gen.1.1`).

use std::sync::LazyLock;

use regex::Regex;

use crate::book::BookId;
use crate::error::LocaleError;
use crate::locale::{Bcvt, Tradition};

static OSIS_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]+)\.(\d+)\.(\d+)$").expect("valid regex"));

/// Split an OSIS id into book, chapter and verse.
///
/// # Errors
///
/// Returns [`LocaleError::BadOsisId`] if the id is not `Abbrev.C.V`,
/// [`LocaleError::UnknownOsisAbbrev`] for an unknown book abbreviation.
pub fn osis_id_to_locale_bc(osis_id: &str) -> Result<(BookId, u16, u16), LocaleError> {
    let caps = OSIS_ID_RE
        .captures(osis_id)
        .ok_or_else(|| LocaleError::BadOsisId(osis_id.to_owned()))?;
    let abbrev = &caps[1];
    let book = BookId::ALL
        .into_iter()
        .find(|b| b.osis_abbrev() == abbrev)
        .ok_or_else(|| LocaleError::UnknownOsisAbbrev(abbrev.to_owned()))?;
    let chapter = caps[2]
        .parse()
        .map_err(|_| LocaleError::BadOsisId(osis_id.to_owned()))?;
    let verse = caps[3]
        .parse()
        .map_err(|_| LocaleError::BadOsisId(osis_id.to_owned()))?;
    Ok((book, chapter, verse))
}

/// Parse an OSIS id into a full locale in the given tradition.
///
/// # Errors
///
/// As [`osis_id_to_locale_bc`], plus [`LocaleError::NonPositive`] for
/// chapter or verse 0.
pub fn osis_id_to_locale(osis_id: &str, tradition: Tradition) -> Result<Bcvt, LocaleError> {
    let (book, chapter, verse) = osis_id_to_locale_bc(osis_id)?;
    Bcvt::new(book, chapter, verse, tradition)
}
