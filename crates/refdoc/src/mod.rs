//! refdoc: Reference page generator
//!
//! This crate renders the metadata table of a single class as a Markdown
//! reference page by:
//! - Normalizing doc strings (dedenting the body under the summary line)
//! - Filtering out private and undocumented members
//! - Rendering constructor and method signatures without the receiver
//! - Annotating properties with their type when it is known
//! - Appending an optional companion text verbatim
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐
//! │ #[refdoc_class]  │    │ JSON table /     │
//! │ #[refdoc_methods]│    │ ClassSymbol::new │
//! └────────┬─────────┘    └────────┬─────────┘
//!          │                       │
//!          └───────────┬───────────┘
//!                      ▼
//!               ┌─────────────┐
//!               │ ClassSymbol │
//!               └──────┬──────┘
//!                      ▼
//!               ┌─────────────┐
//!               │  Collector  │──► dedent
//!               └──────┬──────┘
//!                      ▼
//!            ┌───────────────────┐
//!            │ ReferenceDocument │──► Markdown
//!            └───────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use refdoc::build_reference_document;
//! use refdoc_ir::{ClassSymbol, MemberSymbol};
//!
//! let class = ClassSymbol::new("T")
//!     .with_doc("A class.")
//!     .with_constructor("(self, x)")
//!     .member(MemberSymbol::property("value").with_doc("The value."));
//!
//! let page = build_reference_document(&class, None).unwrap();
//! assert!(page.ends_with("**property `T.value`**: The value."));
//! ```

pub mod builder;
pub mod config;
pub mod dedent;
pub mod diagnostics;
pub mod docgen;

// Re-exports for convenience
pub use builder::{BuildOutput, RefDocBuilder};
pub use config::{FailurePolicy, RefDocConfig};
pub use dedent::dedent;
pub use diagnostics::{Diagnostic, DiagnosticSeverity, DiagnosticsCollector, RefDocError, RefDocResult};
pub use docgen::{build_reference_document, BlockKind, Collector, DocBlock, ReferenceDocument};

// Metadata tables
pub use refdoc_ir::{ClassRegistry, ClassSymbol, Documented, MemberKind, MemberSymbol};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
