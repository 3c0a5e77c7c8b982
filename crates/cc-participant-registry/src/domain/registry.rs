//! # Participant Registry
//!
//! Arena-backed registry of participants. Ids are positions in the arena,
//! so the monotonically increasing counter and the storage are the same
//! structure: the registry can neither skip nor reuse an id.

use crate::domain::entities::Participant;
use shared_types::{CredentialHash, CustodyError, ExternalAddress, ParticipantId, Role};
use tracing::debug;

/// Registry of all participants, indexed by sequential id.
///
/// Grows by one on every [`register`](Self::register); no deletions.
#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
}

impl ParticipantRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new participant and returns its id.
    ///
    /// The credential is digested here; the plaintext is not retained.
    /// Duplicate names and addresses are accepted: the original ledger
    /// imposed no uniqueness beyond the id, and neither does this one.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        credential: &str,
        external_address: ExternalAddress,
        role: Role,
    ) -> ParticipantId {
        let id = self.participants.len() as ParticipantId;
        let participant = Participant {
            id,
            name: name.into(),
            credential: CredentialHash::digest(credential),
            external_address,
            role,
        };

        debug!(id, role = %role, "participant registered");
        self.participants.push(participant);
        id
    }

    /// Looks up a participant by id.
    ///
    /// # Errors
    ///
    /// `ParticipantNotFound` if `id` is out of range.
    pub fn lookup(&self, id: ParticipantId) -> Result<&Participant, CustodyError> {
        self.participants
            .get(id as usize)
            .ok_or(CustodyError::ParticipantNotFound(id))
    }

    /// Validates submitted credentials against the stored record.
    ///
    /// Returns true iff all four fields match exactly. Any mismatch,
    /// including an out-of-range id, yields false rather than an error:
    /// authentication failure is a result, not a malformed reference.
    #[must_use]
    pub fn authenticate(
        &self,
        id: ParticipantId,
        name: &str,
        credential: &str,
        role: Role,
    ) -> bool {
        let digest = CredentialHash::digest(credential);
        match self.participants.get(id as usize) {
            Some(p) => p.matches(name, &digest, role),
            None => false,
        }
    }

    /// Number of registered participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns true if nobody has registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterates over all participants in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
