//! Documentation generation core
//!
//! This module turns a class metadata table into a reference document:
//! member classification and filtering (`collector`), signature rewriting
//! (`signature`), and Markdown assembly (`markdown`).

mod collector;
pub mod markdown;
pub mod signature;

pub use collector::{build_reference_document, Collector};
pub use markdown::{BlockKind, DocBlock, ReferenceDocument, BLOCK_SEPARATOR};
pub use signature::{elide_unit_return, render_signature, strip_receiver};
