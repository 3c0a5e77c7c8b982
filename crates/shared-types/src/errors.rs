//! # Error Types
//!
//! The error taxonomy shared across subsystems. Two classes exist:
//!
//! - **NotFound**: a referenced id does not exist in a registry or ledger.
//! - **RoleViolation**: an operation was attempted by or towards a
//!   participant whose role disallows it.
//!
//! Authentication failure is deliberately NOT an error: it is a boolean
//! result returned by the participant registry.

use crate::ids::{ParticipantId, ProductId, RecordIndex};
use crate::roles::Role;
use thiserror::Error;

/// Errors that can occur while operating the custody ledger.
///
/// Every error aborts the triggering call with zero partial state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustodyError {
    /// Participant id is not registered.
    #[error("participant not found: id {0}")]
    ParticipantNotFound(ParticipantId),

    /// Product id is not registered.
    #[error("product not found: id {0}")]
    ProductNotFound(ProductId),

    /// Ownership record index exceeds the recorded count.
    #[error("ownership record not found: index {0}")]
    RecordNotFound(RecordIndex),

    /// Operation restricted to a specific role.
    #[error("operation requires {required} role, participant {id} is {actual}")]
    RoleRequired {
        /// Participant that attempted the operation.
        id: ParticipantId,
        /// Role the operation demands.
        required: Role,
        /// Role actually held.
        actual: Role,
    },

    /// The requested custody edge is not in the transition table.
    #[error("invalid ownership transfer: {from} -> {to}")]
    InvalidTransfer {
        /// Role of the current owner.
        from: Role,
        /// Role of the proposed new owner.
        to: Role,
    },

    /// Role string submitted at registration matches no known role.
    #[error("unrecognized role: {role:?}")]
    UnrecognizedRole {
        /// The rejected role name.
        role: String,
    },
}

impl CustodyError {
    /// Returns true if this error is in the NotFound class (a malformed
    /// reference, as opposed to a disallowed operation).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ParticipantNotFound(_) | Self::ProductNotFound(_) | Self::RecordNotFound(_)
        )
    }

    /// Returns true if this error is in the RoleViolation class.
    #[must_use]
    pub fn is_role_violation(&self) -> bool {
        matches!(
            self,
            Self::RoleRequired { .. } | Self::InvalidTransfer { .. } | Self::UnrecognizedRole { .. }
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
