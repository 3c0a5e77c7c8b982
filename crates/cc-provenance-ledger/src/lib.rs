//! # Provenance Ledger - Custody History Subsystem
//!
//! ## Purpose
//!
//! Append-only history of accepted ownership transfers. One record is
//! written per accepted transfer, and records are never edited or removed.
//! The provenance of a product is its records in insertion order, which is
//! both chronological order and custody order.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Records are append-only | no mutating accessor exists |
//! | Per-product sequence indices are a contiguous 0-based run | `append` derives the index from the current track length |
//! | History length = accepted transfer count | only the transfer engine calls `append`, once per accepted transfer |
//!
//! Product registration writes nothing here; a never-transferred product has
//! an empty (not missing) history.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::ledger::ProvenanceLedger;
    pub use crate::domain::record::OwnershipRecord;
}

pub use domain::ledger::ProvenanceLedger;
pub use domain::record::OwnershipRecord;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Provenance Ledger";
