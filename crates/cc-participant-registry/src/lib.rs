//! # Participant Registry - Identity Subsystem
//!
//! ## Purpose
//!
//! Stores registered participants, answers identity queries, and validates
//! credentials. Participants are append-only: once registered, a record is
//! never mutated or deleted, and its sequential id is never reused.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Ids are a contiguous 0-based run | `domain/registry.rs` - arena indexing |
//! | Records are immutable after registration | `lookup` hands out shared references only |
//! | Unrecognized role names never enter the registry | `register` takes a parsed [`Role`](shared_types::Role) |
//!
//! Duplicate names and addresses are allowed: identity is the id, nothing
//! else.
//!
//! ## Usage Example
//!
//! ```
//! use cc_participant_registry::prelude::*;
//! use shared_types::Role;
//!
//! let mut registry = ParticipantRegistry::new();
//! let alice = registry.register("Alice", "password", [1u8; 20], Role::Manufacturer);
//!
//! assert!(registry.authenticate(alice, "Alice", "password", Role::Manufacturer));
//! assert!(!registry.authenticate(alice, "Alice", "wrong", Role::Manufacturer));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::Participant;
    pub use crate::domain::registry::ParticipantRegistry;
}

pub use domain::entities::Participant;
pub use domain::registry::ParticipantRegistry;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Participant Registry";
