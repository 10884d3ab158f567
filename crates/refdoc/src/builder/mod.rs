//! Builder API for refdoc
//!
//! This module provides the main builder API for generating a reference
//! page and optionally writing it to disk.

mod refdoc_builder;

pub use refdoc_builder::{BuildOutput, RefDocBuilder};
