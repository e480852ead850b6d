//! Error types for MAM-XML parsing.

use std::path::PathBuf;

/// Error reading a MAM-XML document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum XmlError {
    /// Malformed XML.
    #[error("XML parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    /// Tag or text not decodable.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Malformed attribute.
    #[error("XML attribute error")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Attribute value could not be unescaped.
    #[error("bad value for attribute {key:?} on <{tag}>: {message}")]
    AttrValue {
        /// Element carrying the attribute.
        tag: String,
        /// Attribute name.
        key: String,
        /// Underlying error message.
        message: String,
    },

    /// Character data where only elements are allowed.
    #[error("unexpected text inside <{tag}>: {text:?}")]
    UnexpectedText {
        /// Enclosing element.
        tag: String,
        /// The offending text (trimmed).
        text: String,
    },

    /// The input ended while `tag` was still open.
    #[error("unexpected end of file inside <{tag}>")]
    UnexpectedEof {
        /// Innermost open element.
        tag: String,
    },

    /// The document has no root element.
    #[error("document has no root element")]
    NoRoot,

    /// Parse error in a named file.
    #[error("{}: {source}", .path.display())]
    InFile {
        /// File being parsed.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: Box<XmlError>,
    },

    /// I/O error reading the file.
    #[error("failed to read {}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
