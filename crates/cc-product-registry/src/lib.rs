//! # Product Registry - Tracked Item Subsystem
//!
//! ## Purpose
//!
//! Stores product records and their current custody pointer. Only a
//! participant holding the `Manufacturer` role may register a product; the
//! creator becomes both the origin manufacturer (immutable) and the first
//! custodian.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Only manufacturers create products | `domain/registry.rs` - `add_product` role gate |
//! | `current_owner` is the only mutable field | `set_owner` is the sole mutator |
//! | `origin_manufacturer` never changes | no mutator exists |
//!
//! Registration writes **no** initial ownership record: the provenance of a
//! product counts accepted transfers only.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::{Product, ProductDetails};
    pub use crate::domain::registry::ProductRegistry;
}

pub use domain::entities::{Product, ProductDetails};
pub use domain::registry::ProductRegistry;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Product Registry";
