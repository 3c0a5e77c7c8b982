//! # Participant Entity

use serde::{Deserialize, Serialize};
use shared_types::{CredentialHash, ExternalAddress, ParticipantId, Role};

/// A registered identity on the custody ledger.
///
/// Created only via [`ParticipantRegistry::register`]; immutable afterwards.
///
/// [`ParticipantRegistry::register`]: crate::domain::registry::ParticipantRegistry::register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Sequential id, immutable once assigned.
    pub id: ParticipantId,
    /// Display name. Not unique.
    pub name: String,
    /// Opaque credential digest, compared, never decrypted.
    pub credential: CredentialHash,
    /// Chain identity of the controlling agent. Not unique.
    pub external_address: ExternalAddress,
    /// Role governing which ledger operations this participant may perform.
    pub role: Role,
}

impl Participant {
    /// Returns true if every submitted field matches the stored record
    /// exactly. This is the whole of the authentication check: a boolean,
    /// never an error.
    #[must_use]
    pub fn matches(&self, name: &str, credential: &CredentialHash, role: Role) -> bool {
        self.name == name && self.credential == *credential && self.role == role
    }
}

// =============================================================================
// TESTS
// =============================================================================
