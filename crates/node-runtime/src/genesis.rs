//! # Genesis Seeding
//!
//! A deployment can declare its initial participants in a JSON file and
//! have them registered in order before the node starts serving. Ids are
//! assigned sequentially, so file order is id order.

use crate::events::RegisterParticipantRequest;
use crate::ports::CustodyApi;
use crate::service::CustodyService;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use shared_types::{ExternalAddress, ParticipantId};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// One participant to register at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisParticipant {
    /// Display name.
    pub name: String,
    /// Plaintext credential; digested on registration.
    pub credential: String,
    /// Hex-encoded 20-byte chain address.
    pub external_address: String,
    /// Role name, validated on registration.
    pub role: String,
}

/// Declarative genesis state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Participants registered in order; ids are assigned sequentially
    /// from 0, so the file order is the id order.
    pub participants: Vec<GenesisParticipant>,
}

impl GenesisConfig {
    /// Reads a genesis file.
    ///
    /// # Errors
    ///
    /// I/O or JSON parse failures, with the offending path in context.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read genesis file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse genesis file {}", path.display()))
    }

    /// Registers every genesis participant against a fresh service.
    ///
    /// # Errors
    ///
    /// A malformed address or unrecognized role aborts seeding; genesis
    /// files are trusted input and a bad entry means a bad deployment.
    pub async fn apply(&self, service: &CustodyService) -> Result<Vec<ParticipantId>> {
        let mut ids = Vec::with_capacity(self.participants.len());

        for entry in &self.participants {
            let address = parse_address(&entry.external_address)
                .with_context(|| format!("genesis participant {:?}", entry.name))?;

            let response = service
                .register_participant(
                    Uuid::new_v4(),
                    RegisterParticipantRequest {
                        name: entry.name.clone(),
                        credential: entry.credential.clone(),
                        external_address: address,
                        role: entry.role.clone(),
                    },
                )
                .await
                .with_context(|| format!("genesis participant {:?}", entry.name))?;

            info!(
                id = response.participant_id,
                name = %entry.name,
                role = %entry.role,
                "genesis participant registered"
            );
            ids.push(response.participant_id);
        }

        Ok(ids)
    }
}

fn parse_address(hex_address: &str) -> Result<ExternalAddress> {
    let stripped = hex_address.strip_prefix("0x").unwrap_or(hex_address);
    let bytes = hex::decode(stripped).context("address is not valid hex")?;
    if bytes.len() != 20 {
        bail!("address must be 20 bytes, got {}", bytes.len());
    }
    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

// =============================================================================
// TESTS
// =============================================================================
