//! Tag-dispatch rendering of MAM-XML verses.
//!
//! Each source element is rewritten bottom-up by the handler registered for
//! its `(tag, class)` pair in a [`HandlerTable`]. The [`Renderer`] drives the
//! recursion and coalesces adjacent text after every step.
//!
//! ```
//! use mam_core::{CantPass, HandlerOptions, Renderer};
//! use mam_markup::Markup;
//! use mam_xml::SourceNode;
//!
//! let verse = SourceNode::new("verse").with_child(SourceNode::text("בְּרֵאשִׁית"));
//! let renderer = Renderer::for_pass(CantPass::Dual, &HandlerOptions::default());
//! assert_eq!(renderer.render(&verse).unwrap(), vec![Markup::from("בְּרֵאשִׁית")]);
//! ```

mod engine;
mod error;
mod handlers;
mod options;
mod process;
mod table;

pub use engine::Renderer;
pub use error::RenderError;
pub use handlers::standard_table;
pub use options::{CantPass, HandlerOptions, KetivMaqaf, NoteStyle};
pub use process::{BookOutput, RenderedVerse, process_all_passes, process_book_group};
pub use table::{ChildOutput, DispatchKey, Handler, HandlerTable};
