//! Rendering options that select between handler conventions.

use std::fmt;

use mam_xml::VerseSelection;

/// Which cantillation reading a rendering pass produces.
///
/// A handful of verses (the decalogues, Genesis 35:22) carry two accent
/// systems. The dual pass shows both combined; the alef and bet passes show
/// the lower and upper reading alone and cover only those verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CantPass {
    Dual,
    Alef,
    Bet,
}

impl CantPass {
    pub const ALL: [Self; 3] = [Self::Dual, Self::Alef, Self::Bet];

    /// Label used in debug dumps.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dual => "rv-cant-dual",
            Self::Alef => "rv-cant-alef",
            Self::Bet => "rv-cant-bet",
        }
    }

    /// Verses this pass renders.
    #[must_use]
    pub fn selection(self) -> VerseSelection {
        match self {
            Self::Dual => VerseSelection::All,
            Self::Alef | Self::Bet => VerseSelection::WithCantAllThree,
        }
    }
}

impl fmt::Display for CantPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How scroll-difference notes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NoteStyle {
    /// `scrdfftar` with `sdt-target` and `sdt-note` children; the note goes
    /// before or after the target per `sdt-starpos`.
    #[default]
    TargetRelative,
    /// Stand-alone `note` elements rendered as a trailing footnote.
    Trailing,
}

/// Where `append-maqaf` puts the maqaf relative to the closing parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KetivMaqaf {
    /// `(...)־`
    #[default]
    AfterBracket,
    /// `(...־)`
    BeforeBracket,
}

/// Options fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandlerOptions {
    pub note_style: NoteStyle,
    pub ketiv_maqaf: KetivMaqaf,
}
