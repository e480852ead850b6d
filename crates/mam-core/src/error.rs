//! Rendering errors.

use mam_books::LocaleError;

use crate::table::DispatchKey;

/// Error rendering a verse.
///
/// Every variant means the input (or the handler table) is wrong; none is
/// recoverable.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// No handler registered for this tag and class.
    #[error("no handler for {0}")]
    DispatchMiss(DispatchKey),

    /// An element has both a `text` attribute and rendered children.
    #[error("<{tag}> has both a text attribute and child output")]
    TextWithChildren {
        /// Offending element.
        tag: String,
    },

    /// A handler needs a fixed number of children.
    #[error("<{tag}> must have exactly {expected} children, found {found}")]
    ChildCount {
        /// Offending element.
        tag: String,
        /// Required count.
        expected: usize,
        /// Actual count.
        found: usize,
    },

    /// A required attribute is absent.
    #[error("<{tag}> is missing attribute {attr:?}")]
    MissingAttribute {
        /// Offending element.
        tag: String,
        /// Attribute name.
        attr: &'static str,
    },

    /// An attribute has a value outside its closed vocabulary.
    #[error("<{tag}> has unknown {attr:?} value {value:?}")]
    UnknownAttributeValue {
        /// Offending element.
        tag: String,
        /// Attribute name.
        attr: &'static str,
        /// The value found.
        value: String,
    },

    /// A verse's `osisID` does not resolve to a locale.
    #[error("bad verse locale: {0}")]
    Locale(#[from] LocaleError),
}
