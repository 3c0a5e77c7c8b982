//! # Transfer Execution
//!
//! The single mutating operation of the subsystem. Validation is strictly
//! ordered before any write: once the role check has passed, the owner
//! pointer update and the ledger append cannot fail, so the pair commits as
//! one atomic unit and a rejected transfer leaves zero state change.

use cc_participant_registry::ParticipantRegistry;
use cc_product_registry::ProductRegistry;
use cc_provenance_ledger::ProvenanceLedger;
use serde::{Deserialize, Serialize};
use shared_types::{CustodyError, ParticipantId, ProductId, RecordIndex};
use tracing::{debug, info};

/// What an accepted transfer committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// Global index of the appended ownership record.
    pub record_index: RecordIndex,
    /// Custodian before the transfer.
    pub previous_owner: ParticipantId,
    /// Custodian after the transfer.
    pub new_owner: ParticipantId,
}

/// Executes a custody transfer of `product_id` to `new_owner_id`.
///
/// Contract, in order:
///
/// 1. Resolve the product.
/// 2. Resolve the current owner, the candidate owner, and the acting
///    participant.
/// 3. Check the transition table: the current owner's stored role must have
///    the candidate's stored role as a legal successor.
/// 4. Commit: overwrite the custody pointer, then append exactly one
///    ownership record with the product's next sequence index.
///
/// Legality is judged against the stored custody pointer, not the caller's
/// claim: the acting participant is resolved (a dangling id is still an
/// error) but holds no special authority over the outcome.
///
/// # Errors
///
/// - `ProductNotFound` / `ParticipantNotFound` for dangling ids (step 1-2).
/// - `InvalidTransfer` for any edge outside the transition table (step 3).
///
/// Either way, no state changes.
pub fn transfer(
    participants: &ParticipantRegistry,
    products: &mut ProductRegistry,
    ledger: &mut ProvenanceLedger,
    product_id: ProductId,
    new_owner_id: ParticipantId,
    acting_id: ParticipantId,
) -> Result<TransferOutcome, CustodyError> {
    // Step 1-2: resolve everything before touching anything.
    let product = products.lookup(product_id)?;
    let current_owner = participants.lookup(product.current_owner)?;
    let candidate = participants.lookup(new_owner_id)?;
    participants.lookup(acting_id)?;

    // Step 3: transition table.
    if !current_owner.role.may_transfer_to(candidate.role) {
        debug!(
            product = product_id,
            from = %current_owner.role,
            to = %candidate.role,
            "transfer rejected"
        );
        return Err(CustodyError::InvalidTransfer {
            from: current_owner.role,
            to: candidate.role,
        });
    }

    // Step 4: commit. Both writes are infallible past this point; the
    // set_owner lookup cannot miss because step 1 resolved the same id.
    let previous_owner = current_owner.id;
    products.set_owner(product_id, candidate.id)?;
    let record_index = ledger.append(product_id, previous_owner, candidate.id);

    info!(
        product = product_id,
        previous_owner,
        new_owner = candidate.id,
        record_index,
        "custody transferred"
    );

    Ok(TransferOutcome {
        record_index,
        previous_owner,
        new_owner: candidate.id,
    })
}

// =============================================================================
// TESTS
// =============================================================================
