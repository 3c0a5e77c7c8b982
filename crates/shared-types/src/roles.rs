//! # Participant Roles
//!
//! The closed role enumeration and the fixed role-transition table that
//! governs custody transfers.
//!
//! A product's custody walks a one-way chain:
//!
//! ```text
//! Manufacturer ──→ Supplier ──→ Consumer
//! ```
//!
//! `Consumer` is terminal: no outgoing legal edges are defined.

use crate::errors::CustodyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ROLE
// =============================================================================

/// Role of a participant in the supply chain.
///
/// The role governs which ledger operations a participant may perform:
/// only a `Manufacturer` may register products, and custody may only move
/// along the edges of the transition table (see [`Role::may_transfer_to`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Creates products and holds them initially.
    Manufacturer,
    /// Intermediate custodian between manufacturer and consumer.
    Supplier,
    /// Terminal custodian; no further transfers are legal.
    Consumer,
}

impl Role {
    /// Returns true if a participant with this role may hand custody to a
    /// participant with role `successor`.
    ///
    /// The transition table is fixed:
    ///
    /// | From | To | Legal |
    /// |------|----|-------|
    /// | Manufacturer | Supplier | yes |
    /// | Supplier | Consumer | yes |
    /// | anything else | | no |
    ///
    /// Same-role, reverse-direction, and `Manufacturer -> Consumer` edges
    /// are all illegal.
    #[must_use]
    pub fn may_transfer_to(self, successor: Role) -> bool {
        matches!(
            (self, successor),
            (Role::Manufacturer, Role::Supplier) | (Role::Supplier, Role::Consumer)
        )
    }

    /// Returns true if this role has no outgoing legal transfer edge.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Role::Consumer)
    }

    /// The canonical role name as stored on the original ledger.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manufacturer => "Manufacturer",
            Role::Supplier => "Supplier",
            Role::Consumer => "Consumer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CustodyError;

    /// Parses a role name, matching the exact strings the original ledger
    /// compared against. Unrecognized names are rejected at the boundary
    /// instead of being stored verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manufacturer" => Ok(Role::Manufacturer),
            "Supplier" => Ok(Role::Supplier),
            "Consumer" => Ok(Role::Consumer),
            other => Err(CustodyError::UnrecognizedRole {
                role: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
