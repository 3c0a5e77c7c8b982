//! # Participant Registry Domain
//!
//! Pure domain logic: the participant entity and the arena-backed registry.

pub mod entities;
pub mod registry;
