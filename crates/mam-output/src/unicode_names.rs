//! Debug dump naming every character of every rendered verse.
//!
//! Text is split at spaces and no-break spaces; each run becomes one line
//! of comma-separated short names. Hebrew letters, points, accents and
//! punctuation have compact transliteration-like names; everything else
//! uses its Unicode name with the common Hebrew prefixes abbreviated.

use std::borrow::Cow;
use std::fmt::Write;

use mam_core::{BookOutput, CantPass};
use mam_markup::{Markup, chars::NBSP};

use crate::error::OutputError;

const INDENT: &str = "    ";

/// Render one book in the Unicode-names format.
///
/// # Errors
///
/// Returns [`OutputError::UnknownCharName`] for a character with no
/// Unicode name.
pub fn render_unicode_names(book: &BookOutput) -> Result<String, OutputError> {
    let mut out = format!("unicode_names {}\n", book.book.sefaria_name());
    for verse in book.dual_verses() {
        let bcvt = &verse.bcvt;
        let _ = writeln!(
            out,
            "{} {}:{} in vtrad vt{}",
            bcvt.book().tbn(),
            bcvt.chapter(),
            bcvt.verse(),
            bcvt.tradition().name()
        );

        let bodies: Vec<(CantPass, &[Markup])> = CantPass::ALL
            .into_iter()
            .filter_map(|pass| Some((pass, book.verse_in(pass, bcvt)?.body.as_slice())))
            .collect();
        let labelled = bodies.len() > 1;
        for (pass, body) in bodies {
            if labelled {
                let _ = writeln!(out, "{}", pass.label());
                write_parts(&mut out, body, INDENT)?;
            } else {
                write_parts(&mut out, body, "")?;
            }
        }
        out.push('\n');
    }
    Ok(out)
}

fn write_parts(out: &mut String, parts: &[Markup], indent: &str) -> Result<(), OutputError> {
    for part in parts {
        match part {
            Markup::Text(text) => {
                for run in split_runs(text) {
                    let _ = writeln!(out, "{indent}{}", comma_short_names(run)?);
                }
            }
            Markup::Element(el) => {
                let mut attrs = String::new();
                for (key, value) in el.attrs() {
                    let _ = write!(attrs, " {key}={value}");
                }
                let tag = el.tag();
                if el.contents().is_empty() {
                    let _ = writeln!(out, "{indent}START/STOP {tag}{attrs}");
                } else {
                    let _ = writeln!(out, "{indent}START {tag}{attrs}");
                    write_parts(out, el.contents(), indent)?;
                    let _ = writeln!(out, "{indent}STOP {tag}{attrs}");
                }
            }
        }
    }
    Ok(())
}

/// Split `text` at spaces, then at no-break spaces. Separators are kept as
/// runs of their own; empty runs are dropped.
#[must_use]
pub fn split_runs(text: &str) -> Vec<&str> {
    split_keeping(" ", text)
        .into_iter()
        .flat_map(|run| split_keeping(NBSP, run))
        .collect()
}

fn split_keeping<'a>(sep: &'a str, segment: &'a str) -> Vec<&'a str> {
    let mut runs = Vec::new();
    let mut pieces = segment.split(sep).peekable();
    while let Some(piece) = pieces.next() {
        if !piece.is_empty() {
            runs.push(piece);
        }
        if pieces.peek().is_some() {
            runs.push(sep);
        }
    }
    runs
}

/// Short names of every character of `run`, joined by commas.
///
/// # Errors
///
/// As [`short_name`].
pub fn comma_short_names(run: &str) -> Result<String, OutputError> {
    let names = run.chars().map(short_name).collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(","))
}

/// Short name of one character.
///
/// # Errors
///
/// Returns [`OutputError::UnknownCharName`] if `ch` is not in the Hebrew
/// table and has no Unicode name.
pub fn short_name(ch: char) -> Result<Cow<'static, str>, OutputError> {
    if let Some(name) = hebrew_short_name(ch) {
        return Ok(Cow::Borrowed(name));
    }
    let full = unicode_names2::name(ch)
        .ok_or(OutputError::UnknownCharName(ch))?
        .to_string();
    let words: Vec<&str> = full.split_whitespace().collect();
    if words.len() < 3 {
        return Ok(Cow::Owned(full));
    }
    let prefix = match (words[0], words[1]) {
        ("HEBREW", "LETTER") => "HLE".to_owned(),
        ("HEBREW", "POINT") => "HPO".to_owned(),
        ("HEBREW", "ACCENT") => "HAC".to_owned(),
        ("HEBREW", "PUNCTUATION") => "HPU".to_owned(),
        ("HEBREW", "MARK") => "HMA".to_owned(),
        (first, second) => format!("{first} {second}"),
    };
    Ok(Cow::Owned(format!("{prefix} {}", words[2..].join(" "))))
}

#[rustfmt::skip]
fn hebrew_short_name(ch: char) -> Option<&'static str> {
    let name = match ch {
        '\u{034f}' => "CGJ",
        // letters
        '\u{05d0}' => "\u{03b1}", // alef: alpha
        '\u{05d1}' => "v",
        '\u{05d2}' => "g",
        '\u{05d3}' => "d",
        '\u{05d4}' => "h",
        '\u{05d5}' => "w",
        '\u{05d6}' => "z",
        '\u{05d7}' => "x",
        '\u{05d8}' => "\u{03b8}", // tet: theta
        '\u{05d9}' => "y",
        '\u{05da}' => "k.",
        '\u{05db}' => "k",
        '\u{05dc}' => "l",
        '\u{05dd}' => "m.",
        '\u{05de}' => "m",
        '\u{05df}' => "n.",
        '\u{05e0}' => "n",
        '\u{05e1}' => "\u{03c3}", // samekh: sigma
        '\u{05e2}' => "\u{0295}", // ayin: pharyngeal fricative
        '\u{05e3}' => "f.",
        '\u{05e4}' => "f",
        '\u{05e5}' => "\u{0446}.",
        '\u{05e6}' => "\u{0446}", // tsadi: Cyrillic tse
        '\u{05e7}' => "q",
        '\u{05e8}' => "r",
        '\u{05e9}' => "$",
        '\u{05ea}' => "\u{03c4}", // tav: tau
        // points
        '\u{fb1e}' => "varika",
        '\u{05bc}' => "\u{00b7}",
        '\u{05bf}' => "\u{203e}",
        '\u{05c1}' => "\u{00b7}sh",
        '\u{05c2}' => "\u{00b7}si",
        '\u{05b0}' => ":",
        '\u{05b1}' => ":\u{2235}",
        '\u{05b2}' => ":_",
        '\u{05b3}' => ":a",
        '\u{05b4}' => "i",
        '\u{05b5}' => "\u{2025}",
        '\u{05b6}' => "\u{2235}",
        '\u{05b7}' => "_",
        '\u{05b8}' => "a",
        '\u{05c7}' => "oa",
        '\u{05ba}' => "\u{1e25}\u{1e25}fv",
        '\u{05b9}' => "o",
        '\u{05bb}' => "u",
        // punctuation
        '\u{05be}' => "-",
        '\u{05c0}' => "|",
        '\u{05c3}' => ".",
        // accents; meteg counts as one
        '\u{05bd}' => "\u{1d4c2}",
        '\u{0591}' => "\u{2144}",
        '\u{0592}' => "\u{2234}",
        '\u{0593}' => "(sh)",
        '\u{0594}' => "\u{01b6}",
        '\u{0595}' => "\u{01b5}",
        '\u{0596}' => "(ti)",
        '\u{0597}' => "\u{25c6}",
        '\u{0598}' => "\u{2241}",
        '\u{0599}' => "(p)",
        '\u{059a}' => "(ye)",
        '\u{059b}' => "\u{27d3}",
        '\u{059c}' => "(ge)",
        '\u{059d}' => "\u{03b3}",
        '\u{059e}' => "(G)",
        '\u{059f}' => "(qp)",
        '\u{05a0}' => "\u{2315}",
        '\u{05a1}' => "\u{03bc}",
        '\u{05a2}' => "(ah)",
        '\u{05a3}' => "\u{2143}",
        '\u{05a4}' => "<",
        '\u{05a5}' => "(me)",
        '\u{05a6}' => "(mk)",
        '\u{05a7}' => "(da)",
        '\u{05a8}' => "(qa)",
        '\u{05a9}' => "(tq)",
        '\u{05aa}' => "(yy)",
        '\u{05ab}' => "(ol)",
        '\u{05ac}' => "(il)",
        '\u{05ad}' => "(de)",
        '\u{05ae}' => "~",
        _ => return None,
    };
    Some(name)
}
