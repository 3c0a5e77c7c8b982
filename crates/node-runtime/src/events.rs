//! # Service Payloads
//!
//! Request and response payloads crossing the service boundary. The
//! submission layer (wallet/signing client) produces requests; responses are
//! rendered by the presentation layer. Payloads carry data only; the
//! correlation id travels beside them, never inside.
//!
//! Role names cross the boundary as strings (the submission layer speaks
//! strings); they are parsed into [`Role`](shared_types::Role) at the edge
//! and rejected there if unrecognized.

use cc_provenance_ledger::OwnershipRecord;
use serde::{Deserialize, Serialize};
use shared_types::{ExternalAddress, ParticipantId, ProductId, RecordIndex};

// =============================================================================
// MUTATING REQUESTS
// =============================================================================

/// Register a new participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    /// Display name.
    pub name: String,
    /// Plaintext credential; digested at the boundary, never stored.
    pub credential: String,
    /// Chain identity of the controlling agent.
    pub external_address: ExternalAddress,
    /// Role name, parsed at the boundary.
    pub role: String,
}

/// Result of a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantResponse {
    /// Assigned sequential id.
    pub participant_id: ParticipantId,
}

/// Register a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProductRequest {
    /// Participant creating the product; must be a manufacturer.
    pub creator: ParticipantId,
    /// Manufacturer model number.
    pub model_number: String,
    /// Part number.
    pub part_number: String,
    /// Serial number.
    pub serial_number: String,
    /// Cost in ledger units.
    pub cost: u64,
}

/// Result of a product registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProductResponse {
    /// Assigned sequential id.
    pub product_id: ProductId,
}

/// Transfer custody of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferOwnershipRequest {
    /// Product being transferred.
    pub product: ProductId,
    /// Proposed new custodian.
    pub new_owner: ParticipantId,
    /// Participant submitting the transfer.
    pub acting: ParticipantId,
}

/// What an accepted transfer committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferOwnershipResponse {
    /// Global index of the appended ownership record.
    pub record_index: RecordIndex,
    /// Custodian before the transfer.
    pub previous_owner: ParticipantId,
    /// Custodian after the transfer.
    pub new_owner: ParticipantId,
}

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Validate a participant's credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    /// Claimed participant id.
    pub participant: ParticipantId,
    /// Claimed name.
    pub name: String,
    /// Plaintext credential to check.
    pub credential: String,
    /// Claimed role name.
    pub role: String,
}

/// Outcome of an authentication check. Never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    /// True iff every submitted field matched the stored record.
    pub authenticated: bool,
}

// =============================================================================
// READ RESPONSES
// =============================================================================

/// Public view of a participant. The credential digest never leaves the
/// registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantInfo {
    /// Sequential id.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Chain identity of the controlling agent.
    pub external_address: ExternalAddress,
    /// Role name.
    pub role: String,
}

/// Public view of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Sequential id.
    pub id: ProductId,
    /// Manufacturer model number.
    pub model_number: String,
    /// Part number.
    pub part_number: String,
    /// Serial number.
    pub serial_number: String,
    /// Cost in ledger units.
    pub cost: u64,
    /// Current custodian.
    pub current_owner: ParticipantId,
    /// Registering manufacturer.
    pub origin_manufacturer: ParticipantId,
}

/// The ordered custody history of a product. Empty if never transferred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvenanceResponse {
    /// Records in chronological order.
    pub records: Vec<OwnershipRecord>,
}
