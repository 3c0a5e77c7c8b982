//! # Domain Invariants
//!
//! Whole-state invariants of the custody ledger, checkable at any quiescent
//! point. The transfer engine maintains these by construction; the checks
//! exist for audits and tests, not for the hot path.

use cc_participant_registry::ParticipantRegistry;
use cc_product_registry::ProductRegistry;
use cc_provenance_ledger::ProvenanceLedger;
use shared_types::{ParticipantId, ProductId, Role};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-4: Owner Reference Validity
///
/// Every product's custody pointer references a registered participant.
#[must_use]
pub fn check_owner_references(
    participants: &ParticipantRegistry,
    products: &ProductRegistry,
) -> bool {
    products
        .iter()
        .all(|p| participants.lookup(p.current_owner).is_ok())
}

/// INVARIANT-5: History Contiguity
///
/// For every product, recorded sequence indices form a contiguous 0-based
/// run in chronological order.
#[must_use]
pub fn check_history_contiguity(products: &ProductRegistry, ledger: &ProvenanceLedger) -> bool {
    products.iter().all(|p| {
        ledger
            .history(p.id)
            .enumerate()
            .all(|(expected, record)| record.sequence_index == expected as u64)
    })
}

/// INVARIANT-1 (recorded form): Transition Legality
///
/// Every recorded transfer moved custody along a legal edge of the
/// transition table. Roles are immutable, so the check holds retroactively.
#[must_use]
pub fn check_recorded_transitions(
    participants: &ParticipantRegistry,
    products: &ProductRegistry,
    ledger: &ProvenanceLedger,
) -> bool {
    products.iter().all(|p| {
        ledger.history(p.id).all(|record| {
            let legal = |from: ParticipantId, to: ParticipantId| -> Option<bool> {
                let from_role = participants.lookup(from).ok()?.role;
                let to_role = participants.lookup(to).ok()?.role;
                Some(from_role.may_transfer_to(to_role))
            };
            legal(record.previous_owner, record.new_owner).unwrap_or(false)
        })
    })
}

// =============================================================================
// AGGREGATE CHECK
// =============================================================================

/// A detected invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A custody pointer references an unregistered participant.
    DanglingOwner {
        /// Product with the dangling pointer.
        product: ProductId,
        /// The unregistered participant id.
        owner: ParticipantId,
    },
    /// A product's history is not a contiguous 0-based run.
    NonContiguousHistory {
        /// Product with the broken run.
        product: ProductId,
    },
    /// A recorded transfer used an edge outside the transition table.
    IllegalRecordedTransition {
        /// Product whose history holds the record.
        product: ProductId,
        /// Position of the offending record.
        sequence_index: u64,
        /// Role of the recorded previous owner, if resolvable.
        from: Option<Role>,
        /// Role of the recorded new owner, if resolvable.
        to: Option<Role>,
    },
}

/// Result of checking all invariants.
#[derive(Debug, Clone, Default)]
pub struct InvariantCheckResult {
    /// All violations found, empty when the state is sound.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    /// Returns true if no violation was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks every whole-state invariant and collects all violations.
#[must_use]
pub fn check_all_invariants(
    participants: &ParticipantRegistry,
    products: &ProductRegistry,
    ledger: &ProvenanceLedger,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    for product in products.iter() {
        if participants.lookup(product.current_owner).is_err() {
            violations.push(InvariantViolation::DanglingOwner {
                product: product.id,
                owner: product.current_owner,
            });
        }

        for (expected, record) in ledger.history(product.id).enumerate() {
            if record.sequence_index != expected as u64 {
                violations.push(InvariantViolation::NonContiguousHistory {
                    product: product.id,
                });
                break;
            }
        }

        for record in ledger.history(product.id) {
            let from = participants.lookup(record.previous_owner).ok().map(|p| p.role);
            let to = participants.lookup(record.new_owner).ok().map(|p| p.role);
            let legal = matches!((from, to), (Some(f), Some(t)) if f.may_transfer_to(t));
            if !legal {
                violations.push(InvariantViolation::IllegalRecordedTransition {
                    product: product.id,
                    sequence_index: record.sequence_index,
                    from,
                    to,
                });
            }
        }
    }

    InvariantCheckResult { violations }
}

// =============================================================================
// TESTS
// =============================================================================
