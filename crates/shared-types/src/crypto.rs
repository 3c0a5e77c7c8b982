//! # Credential Digests
//!
//! Participant credentials are stored as opaque SHA-256 digests and compared
//! by value; the ledger never holds or reveals the plaintext secret.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 32-byte SHA-256 digest of a participant credential.
///
/// Constructed once at the registration boundary; authentication re-digests
/// the submitted secret and compares digests.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialHash([u8; 32]);

impl CredentialHash {
    /// Digests a plaintext secret.
    #[must_use]
    pub fn digest(secret: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CredentialHash {
    // Digest is opaque but loggable; plaintext never reaches this type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CredentialHash({})", hex::encode(&self.0[..4]))
    }
}

// =============================================================================
// TESTS
// =============================================================================
