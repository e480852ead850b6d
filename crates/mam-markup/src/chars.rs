//! Characters emitted by the verse handlers.

/// NO-BREAK SPACE.
pub const NBSP: &str = "\u{00a0}";

/// Eight consecutive no-break spaces (samekh gap, shirah spacing).
pub const OCTO_NBSP: &str = "\u{00a0}\u{00a0}\u{00a0}\u{00a0}\u{00a0}\u{00a0}\u{00a0}\u{00a0}";

/// THIN SPACE.
pub const THSP: &str = "\u{2009}";

/// EM SPACE.
pub const EMSP: &str = "\u{2003}";

/// COMBINING GRAPHEME JOINER.
pub const CGJ: &str = "\u{034f}";

/// HEBREW PUNCTUATION MAQAF.
pub const MAQAF: &str = "\u{05be}";

/// HEBREW PUNCTUATION PASEQ, shared by legarmeih and paseq.
pub const PASEQ: &str = "\u{05c0}";

/// HEBREW PUNCTUATION NUN HAFUKHA (inverted nun).
pub const NUN_HAFUKHA: &str = "\u{05c6}";

/// Literal samekh glyph shown for a closed-paragraph marker.
pub const SAMEKH_MARK: &str = "{\u{05e1}}";

/// Literal pe glyph shown for an open-paragraph marker.
pub const PE_MARK: &str = "{\u{05e4}}";
