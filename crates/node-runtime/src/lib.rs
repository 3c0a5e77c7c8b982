//! # Custody-Chain Node Runtime
//!
//! The entry point wiring the four subsystems into one node:
//!
//! | Subsystem | Crate | Purpose |
//! |-----------|-------|---------|
//! | Participant Registry | `cc-participant-registry` | identity + authentication |
//! | Product Registry | `cc-product-registry` | product records + custody pointer |
//! | Transfer Engine | `cc-transfer-engine` | role-ordered transfers |
//! | Provenance Ledger | `cc-provenance-ledger` | append-only history |
//!
//! ## Modular Structure
//!
//! - `config` - environment-driven node configuration
//! - `events` - request/response payloads crossing the boundary
//! - `ports` - the inbound API trait ([`CustodyApi`](ports::CustodyApi))
//! - `service` - the serialized state machine behind the API
//! - `genesis` - startup seeding of initial participants
//!
//! ## Execution Model
//!
//! The ledger is one authoritative state machine. All mutating calls are
//! serialized behind a single write lock, which stands in for the total
//! ordering an external consensus substrate would provide; reads observe
//! the last committed write.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod events;
pub mod genesis;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::NodeConfig;
    pub use crate::events::{
        AddProductRequest, AddProductResponse, AuthenticateRequest, AuthenticateResponse,
        ParticipantInfo, ProductInfo, ProvenanceResponse, RegisterParticipantRequest,
        RegisterParticipantResponse, TransferOwnershipRequest, TransferOwnershipResponse,
    };
    pub use crate::genesis::{GenesisConfig, GenesisParticipant};
    pub use crate::ports::CustodyApi;
    pub use crate::service::{ChainState, CustodyService, ServiceStats};
}

pub use config::NodeConfig;
pub use ports::CustodyApi;
pub use service::CustodyService;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
