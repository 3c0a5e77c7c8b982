//! # Ownership Record

use serde::{Deserialize, Serialize};
use shared_types::{ParticipantId, ProductId};

/// One immutable entry in a product's provenance history.
///
/// Appended exactly once per accepted transfer; never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRecord {
    /// The product whose custody changed.
    pub product: ProductId,
    /// Custodian after the transfer.
    pub new_owner: ParticipantId,
    /// Custodian before the transfer.
    pub previous_owner: ParticipantId,
    /// 0-based position in this product's history. Contiguous per product.
    pub sequence_index: u64,
}
