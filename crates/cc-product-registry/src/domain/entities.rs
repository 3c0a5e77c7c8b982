//! # Product Entities

use serde::{Deserialize, Serialize};
use shared_types::{ParticipantId, ProductId};

/// Descriptive fields of a product, fixed at registration.
///
/// The model, part, and serial numbers are opaque strings; no uniqueness is
/// enforced on any of them. Cost is non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Manufacturer model number.
    pub model_number: String,
    /// Part number.
    pub part_number: String,
    /// Serial number.
    pub serial_number: String,
    /// Cost in ledger units.
    pub cost: u64,
}

/// A tracked physical item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential id, immutable once assigned.
    pub id: ProductId,
    /// Descriptive fields, immutable after registration.
    pub details: ProductDetails,
    /// Current custodian. The only mutable field; updated exclusively by
    /// the ownership transfer engine.
    pub current_owner: ParticipantId,
    /// The manufacturer that registered this product. Immutable.
    pub origin_manufacturer: ParticipantId,
}

// =============================================================================
// TESTS
// =============================================================================
