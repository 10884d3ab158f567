//! refdoc-ir: Class metadata tables for refdoc
//!
//! Rust has no runtime reflection, so a documented class is described by an
//! explicit table instead: its name, doc comment, constructor signature and
//! members in declaration order. Tables come from three places:
//!
//! - the `#[refdoc_class]` / `#[refdoc_methods]` attribute macros
//!   (see the `refdoc-macro` crate)
//! - hand-written builders on [`ClassSymbol`]
//! - JSON files exported by another build step
//!
//! # Architecture
//!
//! - `ir::symbol`: [`ClassSymbol`], [`MemberSymbol`] and the traits the
//!   macros implement
//! - `ir::inventory`: link-time collection of registered classes
//!
//! # Usage
//!
//! ```rust,ignore
//! use refdoc_macro::{refdoc_class, refdoc_methods};
//!
//! /// A slicer for 3D volumes.
//! #[refdoc_class]
//! pub struct VolumeSlicer { /* ... */ }
//!
//! #[refdoc_methods]
//! impl VolumeSlicer {
//!     /// Create a slicer.
//!     pub fn new(axis: u8) -> Self { /* ... */ }
//! }
//!
//! let table = <VolumeSlicer as refdoc_ir::Documented>::class_symbol();
//! ```

pub mod ir;

// Re-export commonly used types
pub use ir::{
    collect_classes, ClassRegistry, ClassSymbol, Documented, DocumentedClass, DocumentedMembers,
    MemberKind, MemberSymbol, REFDOC_CLASSES,
};

// Re-export linkme for inventory
pub use linkme;
