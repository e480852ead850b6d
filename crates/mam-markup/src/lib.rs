//! Closed-vocabulary markup for rendered MAM verses.
//!
//! Handlers in `mam-core` produce sequences of [`Markup`] values: either a
//! plain text leaf or a small HTML-like [`Element`] (`span`, `sup`, `small`,
//! `big`, `b`, `i`, `br`, ...). This crate provides:
//!
//! - [`Markup`] / [`Element`]: the immutable tree value
//! - [`shrink`]: adjacent-text coalescing applied after every handler
//! - [`HtmlWriter`]: HTML string rendering with per-element line-break hints
//! - [`chars`]: the Unicode characters the handlers emit
//!
//! # Example
//!
//! ```
//! use mam_markup::{Markup, chars, shrink, span_c};
//!
//! let parts = vec![
//!     Markup::from(chars::NBSP),
//!     Markup::from(span_c("{ס}", "mam-spi-samekh")),
//!     Markup::from(""),
//!     Markup::from(chars::OCTO_NBSP),
//! ];
//! assert_eq!(shrink(parts).len(), 3);
//! ```

pub mod chars;
mod html;
mod node;
mod shrink;

pub use html::{HtmlWriter, document, escape_attr, escape_text};
pub use node::{
    Attrs, Contents, Element, Layout, Markup, big, bold, italic, line_break, para, small, span,
    span_c, sup,
};
pub use shrink::{push_shrunk, shrink};
