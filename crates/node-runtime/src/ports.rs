//! # Driving Ports (API - Inbound)
//!
//! The interface the node exposes to its external collaborators: the
//! transaction-submission layer invokes the mutating operations, the
//! presentation layer consumes the read queries. Neither collaborator is
//! implemented here; this trait is their whole contract.

use crate::events::{
    AddProductRequest, AddProductResponse, AuthenticateRequest, AuthenticateResponse,
    ParticipantInfo, ProductInfo, ProvenanceResponse, RegisterParticipantRequest,
    RegisterParticipantResponse, TransferOwnershipRequest, TransferOwnershipResponse,
};
use async_trait::async_trait;
use cc_provenance_ledger::OwnershipRecord;
use shared_types::{CustodyError, ParticipantId, ProductId, RecordIndex};
use uuid::Uuid;

/// Primary API of the custody ledger.
///
/// Mutating operations are serialized behind a single writer boundary;
/// reads observe the last committed write. Every call takes a correlation
/// id so the submission layer can match responses to requests.
#[async_trait]
pub trait CustodyApi: Send + Sync {
    /// Register a participant.
    ///
    /// # Errors
    ///
    /// `UnrecognizedRole` if the role name parses to no known role.
    async fn register_participant(
        &self,
        correlation_id: Uuid,
        request: RegisterParticipantRequest,
    ) -> Result<RegisterParticipantResponse, CustodyError>;

    /// Validate credentials. Mismatches yield `authenticated: false`,
    /// never an error.
    async fn authenticate(
        &self,
        correlation_id: Uuid,
        request: AuthenticateRequest,
    ) -> AuthenticateResponse;

    /// Register a product under a manufacturer participant.
    ///
    /// # Errors
    ///
    /// `ParticipantNotFound` for a dangling creator id; `RoleRequired` if
    /// the creator is not a manufacturer.
    async fn add_product(
        &self,
        correlation_id: Uuid,
        request: AddProductRequest,
    ) -> Result<AddProductResponse, CustodyError>;

    /// Execute a custody transfer.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` / `ParticipantNotFound` for dangling ids;
    /// `InvalidTransfer` for an edge outside the transition table.
    async fn transfer_ownership(
        &self,
        correlation_id: Uuid,
        request: TransferOwnershipRequest,
    ) -> Result<TransferOwnershipResponse, CustodyError>;

    /// Look up a participant's public view.
    ///
    /// # Errors
    ///
    /// `ParticipantNotFound` for a dangling id.
    async fn get_participant(
        &self,
        correlation_id: Uuid,
        id: ParticipantId,
    ) -> Result<ParticipantInfo, CustodyError>;

    /// Look up a product.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` for a dangling id.
    async fn get_product(
        &self,
        correlation_id: Uuid,
        id: ProductId,
    ) -> Result<ProductInfo, CustodyError>;

    /// The ordered custody history of a product; empty if it has never
    /// been transferred.
    async fn get_provenance(&self, correlation_id: Uuid, id: ProductId) -> ProvenanceResponse;

    /// Global ownership record lookup by record index.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` past the recorded count.
    async fn get_ownership_record(
        &self,
        correlation_id: Uuid,
        index: RecordIndex,
    ) -> Result<OwnershipRecord, CustodyError>;
}
