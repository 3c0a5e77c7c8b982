//! # Ownership Transfer Engine - Custody Transition Subsystem
//!
//! ## Purpose
//!
//! Validates and executes role-ordered custody transfers. A transfer is the
//! only operation that moves a product between custodians, and every
//! accepted transfer appends exactly one record to the provenance ledger.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Custody follows the transition table | `engine.rs` - role check before any mutation |
//! | INVARIANT-2 | Owner pointer update and ledger append are atomic | `engine.rs` - validate-then-commit ordering |
//! | INVARIANT-3 | Rejected transfers leave zero state change | `engine.rs` - all checks precede all writes |
//! | INVARIANT-4 | Owner pointers reference existing participants | `invariants.rs` - `check_owner_references` |
//! | INVARIANT-5 | Per-product history is contiguous from 0 | `invariants.rs` - `check_history_contiguity` |
//!
//! ## State Machine
//!
//! A single product's custody walks:
//!
//! ```text
//! Manufacturer-held ──→ Supplier-held ──→ Consumer-held
//! ```
//!
//! Each edge fires exactly one ledger append. `Consumer-held` is terminal.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod invariants;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::engine::{transfer, TransferOutcome};
    pub use crate::invariants::{check_all_invariants, InvariantCheckResult, InvariantViolation};
}

pub use engine::{transfer, TransferOutcome};

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Ownership Transfer Engine";
