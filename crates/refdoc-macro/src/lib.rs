//! Proc macros for refdoc
//!
//! Provides attribute macros that turn a struct and its inherent impl block
//! into a static metadata table (`refdoc_ir::ClassSymbol`) at compile time.
//!
//! # Usage
//!
//! ```text
//! use refdoc_macro::{refdoc_class, refdoc_methods};
//!
//! /// A slicer for 3D volumes.
//! #[refdoc_class]
//! pub struct VolumeSlicer {
//!     /// The axis to slice along.
//!     pub axis: u8,
//! }
//!
//! #[refdoc_methods]
//! impl VolumeSlicer {
//!     /// Create a slicer.
//!     pub fn new(axis: u8) -> Self { Self { axis } }
//!
//!     /// The number of slices.
//!     #[refdoc(property)]
//!     pub fn nslices(&self) -> usize { 0 }
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod refdoc_class;
mod refdoc_methods;
mod type_parser;

/// Attribute macro for documenting a struct as a class
///
/// This macro:
/// 1. Leaves the original struct unchanged (minus `#[refdoc(..)]` markers)
/// 2. Implements `refdoc_ir::DocumentedClass` with the struct's name,
///    doc comment, and its `pub` named fields as properties
///
/// # Attributes
/// - `#[refdoc_class]` - Use the struct name
/// - `#[refdoc_class(name = "Other")]` - Custom class name in headings
///
/// Fields marked `#[refdoc(skip)]` or `#[doc(hidden)]` are left out.
#[proc_macro_attribute]
pub fn refdoc_class(attr: TokenStream, item: TokenStream) -> TokenStream {
    refdoc_class::refdoc_class_impl(attr.into(), item.into()).into()
}

/// Attribute macro for documenting the methods of a class
///
/// Place it on the inherent impl block of a `#[refdoc_class]` type. Every
/// `pub fn` becomes one entry, in declaration order:
///
/// - `new` (or `#[refdoc(constructor)]`) - the constructor signature
/// - `#[refdoc(property)]` - a property typed by its return type
/// - `#[refdoc(skip)]` / `#[doc(hidden)]` - left out
/// - anything else - a method with its full signature
///
/// # Attributes
/// - `#[refdoc_methods(constructor = "create")]` - Constructor function name
#[proc_macro_attribute]
pub fn refdoc_methods(attr: TokenStream, item: TokenStream) -> TokenStream {
    refdoc_methods::refdoc_methods_impl(attr.into(), item.into()).into()
}
