//! Output writers for rendered MAM books.
//!
//! Each [`OutputFormat`] has its own folder under the output directory and
//! one file per book, named after the book's Sefaria index title:
//!
//! ```text
//! {output_dir}/
//! +-- csv{qual}/Genesis.csv            # Sefaria import rows
//! +-- unicode-names{qual}/Genesis.txt  # one line per character run
//! +-- xml{qual}/Genesis.xml            # markup re-serialized as XML
//! +-- html{qual}/Genesis.html          # standalone document
//! ```
//!
//! [`BookWriter`] writes every configured format for a [`BookOutput`];
//! files are written to a temporary file in the destination directory and
//! renamed into place.
//!
//! [`BookOutput`]: mam_core::BookOutput

mod error;
#[cfg(test)]
mod fixtures;
mod format;
mod html;
mod layout;
mod sefaria;
mod unicode_names;
mod writer;
mod xml;

pub use error::OutputError;
pub use format::OutputFormat;
pub use html::render_html;
pub use layout::{output_path, write_atomic};
pub use sefaria::{render_csv, sefaria_header};
pub use unicode_names::{comma_short_names, render_unicode_names, short_name, split_runs};
pub use writer::BookWriter;
pub use xml::render_xml;
