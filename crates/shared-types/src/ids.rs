//! # Identifier Aliases
//!
//! Sequential identifiers assigned by the owning registry. Ids are 0-based
//! arena indices: immutable once assigned, never reused, never deleted.

/// Identifier of a registered participant.
pub type ParticipantId = u64;

/// Identifier of a registered product.
pub type ProductId = u64;

/// Global index of an ownership record in the provenance ledger.
pub type RecordIndex = u64;

/// A 20-byte chain identity of the agent controlling a participant.
pub type ExternalAddress = [u8; 20];
