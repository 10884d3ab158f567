//! Intermediate Representation (IR) for documented classes
//!
//! This module provides the metadata structures a reference page is
//! rendered from, and the inventory that collects them at link time.

pub mod inventory;
pub mod symbol;

pub use inventory::*;
pub use symbol::*;
