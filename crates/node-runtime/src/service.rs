//! # Custody Service
//!
//! Wires the four subsystems behind one async boundary. The external
//! consensus substrate is modeled by a single `RwLock`: every mutating
//! handler holds the write lock for its full validate-and-commit sequence,
//! which serializes writers into one global order. Read handlers take the
//! read lock and observe the last committed write.

use crate::events::{
    AddProductRequest, AddProductResponse, AuthenticateRequest, AuthenticateResponse,
    ParticipantInfo, ProductInfo, ProvenanceResponse, RegisterParticipantRequest,
    RegisterParticipantResponse, TransferOwnershipRequest, TransferOwnershipResponse,
};
use crate::ports::CustodyApi;

use async_trait::async_trait;
use cc_participant_registry::ParticipantRegistry;
use cc_product_registry::{ProductDetails, ProductRegistry};
use cc_provenance_ledger::{OwnershipRecord, ProvenanceLedger};
use cc_transfer_engine::invariants::{check_all_invariants, InvariantCheckResult};
use shared_types::{CustodyError, ParticipantId, ProductId, RecordIndex, Role};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// =============================================================================
// STATE
// =============================================================================

/// The three entity collections making up ledger state.
#[derive(Debug, Default)]
pub struct ChainState {
    /// All registered participants.
    pub participants: ParticipantRegistry,
    /// All registered products.
    pub products: ProductRegistry,
    /// All accepted transfers.
    pub ledger: ProvenanceLedger,
}

/// Statistics for the custody service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Participants registered.
    pub participants_registered: u64,
    /// Products registered.
    pub products_registered: u64,
    /// Transfers accepted and recorded.
    pub transfers_accepted: u64,
    /// Transfers rejected (role violations or dangling ids).
    pub transfers_rejected: u64,
    /// Authentication checks performed.
    pub auth_checks: u64,
    /// Authentication checks that failed.
    pub auth_failures: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The main custody service.
///
/// This service:
/// 1. Receives boundary requests from the submission layer
/// 2. Serializes mutations behind the write lock
/// 3. Produces response payloads for the presentation layer
/// 4. Maintains operation statistics
pub struct CustodyService {
    state: Arc<RwLock<ChainState>>,
    stats: Arc<RwLock<ServiceStats>>,
}

impl CustodyService {
    /// Creates a service over empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ChainState::default())),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Runs every whole-state invariant check against the current state.
    ///
    /// Intended for audits and shutdown checks; the transfer engine keeps
    /// these invariants by construction.
    pub async fn audit(&self) -> InvariantCheckResult {
        let state = self.state.read().await;
        check_all_invariants(&state.participants, &state.products, &state.ledger)
    }
}

impl Default for CustodyService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustodyApi for CustodyService {
    #[instrument(skip(self, request), fields(correlation_id = %correlation_id))]
    async fn register_participant(
        &self,
        correlation_id: Uuid,
        request: RegisterParticipantRequest,
    ) -> Result<RegisterParticipantResponse, CustodyError> {
        // Unrecognized role names stop here, before the write lock.
        let role: Role = request.role.parse()?;

        let mut state = self.state.write().await;
        let participant_id = state.participants.register(
            request.name,
            &request.credential,
            request.external_address,
            role,
        );
        drop(state);

        self.stats.write().await.participants_registered += 1;
        info!(participant_id, role = %role, "participant registered");

        Ok(RegisterParticipantResponse { participant_id })
    }

    #[instrument(skip(self, request), fields(correlation_id = %correlation_id))]
    async fn authenticate(
        &self,
        correlation_id: Uuid,
        request: AuthenticateRequest,
    ) -> AuthenticateResponse {
        // An unknown role name can never match a stored role, so it is an
        // ordinary mismatch here, not an error.
        let authenticated = match request.role.parse::<Role>() {
            Ok(role) => {
                let state = self.state.read().await;
                state.participants.authenticate(
                    request.participant,
                    &request.name,
                    &request.credential,
                    role,
                )
            }
            Err(_) => false,
        };

        let mut stats = self.stats.write().await;
        stats.auth_checks += 1;
        if !authenticated {
            stats.auth_failures += 1;
            warn!(participant = request.participant, "authentication failed");
        }

        AuthenticateResponse { authenticated }
    }

    #[instrument(skip(self, request), fields(correlation_id = %correlation_id))]
    async fn add_product(
        &self,
        correlation_id: Uuid,
        request: AddProductRequest,
    ) -> Result<AddProductResponse, CustodyError> {
        let details = ProductDetails {
            model_number: request.model_number,
            part_number: request.part_number,
            serial_number: request.serial_number,
            cost: request.cost,
        };

        let mut state = self.state.write().await;
        let ChainState {
            participants,
            products,
            ..
        } = &mut *state;

        let creator = participants.lookup(request.creator)?;
        let product_id = products.add_product(creator, details)?;
        drop(state);

        self.stats.write().await.products_registered += 1;
        info!(product_id, creator = request.creator, "product registered");

        Ok(AddProductResponse { product_id })
    }

    #[instrument(skip(self, request), fields(correlation_id = %correlation_id))]
    async fn transfer_ownership(
        &self,
        correlation_id: Uuid,
        request: TransferOwnershipRequest,
    ) -> Result<TransferOwnershipResponse, CustodyError> {
        let mut state = self.state.write().await;
        let ChainState {
            participants,
            products,
            ledger,
        } = &mut *state;

        let result = cc_transfer_engine::transfer(
            participants,
            products,
            ledger,
            request.product,
            request.new_owner,
            request.acting,
        );
        drop(state);

        let mut stats = self.stats.write().await;
        match result {
            Ok(outcome) => {
                stats.transfers_accepted += 1;
                Ok(TransferOwnershipResponse {
                    record_index: outcome.record_index,
                    previous_owner: outcome.previous_owner,
                    new_owner: outcome.new_owner,
                })
            }
            Err(err) => {
                stats.transfers_rejected += 1;
                warn!(product = request.product, error = %err, "transfer rejected");
                Err(err)
            }
        }
    }

    #[instrument(skip(self), fields(correlation_id = %correlation_id))]
    async fn get_participant(
        &self,
        correlation_id: Uuid,
        id: ParticipantId,
    ) -> Result<ParticipantInfo, CustodyError> {
        let state = self.state.read().await;
        let participant = state.participants.lookup(id)?;
        Ok(ParticipantInfo {
            id: participant.id,
            name: participant.name.clone(),
            external_address: participant.external_address,
            role: participant.role.to_string(),
        })
    }

    #[instrument(skip(self), fields(correlation_id = %correlation_id))]
    async fn get_product(
        &self,
        correlation_id: Uuid,
        id: ProductId,
    ) -> Result<ProductInfo, CustodyError> {
        let state = self.state.read().await;
        let product = state.products.lookup(id)?;
        Ok(ProductInfo {
            id: product.id,
            model_number: product.details.model_number.clone(),
            part_number: product.details.part_number.clone(),
            serial_number: product.details.serial_number.clone(),
            cost: product.details.cost,
            current_owner: product.current_owner,
            origin_manufacturer: product.origin_manufacturer,
        })
    }

    #[instrument(skip(self), fields(correlation_id = %correlation_id))]
    async fn get_provenance(&self, correlation_id: Uuid, id: ProductId) -> ProvenanceResponse {
        let state = self.state.read().await;
        ProvenanceResponse {
            records: state.ledger.history(id).cloned().collect(),
        }
    }

    #[instrument(skip(self), fields(correlation_id = %correlation_id))]
    async fn get_ownership_record(
        &self,
        correlation_id: Uuid,
        index: RecordIndex,
    ) -> Result<OwnershipRecord, CustodyError> {
        let state = self.state.read().await;
        state.ledger.record(index).cloned()
    }
}

// =============================================================================
// TESTS
// =============================================================================
