//! MAM-XML source documents.
//!
//! A book-group file is a `<book>` root holding `<verse osisID="...">`
//! elements. Literal text lives only in `text` attributes, so the parsed
//! [`SourceNode`] tree has no text children at all.

mod error;
mod node;
mod parser;
mod select;

pub use error::XmlError;
pub use node::SourceNode;
pub use parser::{parse_file, parse_str};
pub use select::{VerseSelection, select_verses};
