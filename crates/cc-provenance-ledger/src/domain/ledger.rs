//! # Provenance Ledger
//!
//! One flat arena of records plus a per-product track of indices into it.
//! The flat arena answers global record lookups (the audit view); the track
//! answers per-product history queries in chronological order.

use crate::domain::record::OwnershipRecord;
use shared_types::{CustodyError, ParticipantId, ProductId, RecordIndex};
use std::collections::HashMap;
use tracing::debug;

/// Append-only ledger of accepted ownership transfers.
#[derive(Debug, Clone, Default)]
pub struct ProvenanceLedger {
    /// All records in global insertion order.
    records: Vec<OwnershipRecord>,
    /// Per-product indices into `records`, in chronological order.
    tracks: HashMap<ProductId, Vec<usize>>,
}

impl ProvenanceLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record for an accepted transfer and returns its global
    /// record index.
    ///
    /// Called exclusively by the ownership transfer engine, after
    /// validation. The record's `sequence_index` is derived from the length
    /// of the product's existing track, which keeps the per-product run
    /// contiguous and 0-based by construction.
    pub fn append(
        &mut self,
        product: ProductId,
        previous_owner: ParticipantId,
        new_owner: ParticipantId,
    ) -> RecordIndex {
        let track = self.tracks.entry(product).or_default();
        let record = OwnershipRecord {
            product,
            new_owner,
            previous_owner,
            sequence_index: track.len() as u64,
        };

        let index = self.records.len();
        track.push(index);
        self.records.push(record);

        debug!(
            product,
            previous_owner, new_owner, record_index = index, "ownership record appended"
        );
        index as RecordIndex
    }

    /// The custody history of a product, oldest first.
    ///
    /// Lazy, finite, and restartable: each call yields a fresh iterator over
    /// the records committed so far. A never-transferred product yields an
    /// empty sequence, not an error.
    pub fn history(&self, product: ProductId) -> impl Iterator<Item = &OwnershipRecord> + '_ {
        self.tracks
            .get(&product)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.records[i])
    }

    /// Number of accepted transfers recorded for a product.
    #[must_use]
    pub fn history_len(&self, product: ProductId) -> usize {
        self.tracks.get(&product).map_or(0, Vec::len)
    }

    /// Point lookup into a product's history by sequence index.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if `sequence_index` exceeds the recorded count.
    pub fn ownership_at(
        &self,
        product: ProductId,
        sequence_index: u64,
    ) -> Result<&OwnershipRecord, CustodyError> {
        self.tracks
            .get(&product)
            .and_then(|track| track.get(sequence_index as usize))
            .map(|&i| &self.records[i])
            .ok_or(CustodyError::RecordNotFound(sequence_index))
    }

    /// Global point lookup by record index.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if `index` is out of range.
    pub fn record(&self, index: RecordIndex) -> Result<&OwnershipRecord, CustodyError> {
        self.records
            .get(index as usize)
            .ok_or(CustodyError::RecordNotFound(index))
    }

    /// Total number of records across all products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no transfer has ever been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
