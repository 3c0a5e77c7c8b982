//! # Shared Types Crate
//!
//! This crate contains the domain vocabulary shared by every Custody-Chain
//! subsystem: id aliases, the closed [`Role`](roles::Role) enumeration,
//! credential digests, and the error taxonomy.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Closed Roles**: Participant roles are a tagged enum, not free-form
//!   strings; unrecognized role names are rejected at the registration
//!   boundary.
//! - **Opaque Credentials**: Credentials are stored and compared as SHA-256
//!   digests, never as plaintext.

pub mod crypto;
pub mod errors;
pub mod ids;
pub mod roles;

pub use crypto::CredentialHash;
pub use errors::CustodyError;
pub use ids::*;
pub use roles::Role;
