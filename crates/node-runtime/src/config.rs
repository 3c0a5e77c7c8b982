//! # Node Configuration
//!
//! Configuration is read from the environment at startup; everything has a
//! working default so a bare `custody-node` starts an empty ledger.

use std::path::PathBuf;
use tracing::Level;

/// Runtime configuration for the custody node.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Human-readable node name, used in startup banners.
    pub node_name: String,
    /// Path to a JSON genesis file seeding initial participants.
    pub genesis_path: Option<PathBuf>,
    /// Maximum tracing level.
    pub log_level: Level,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_name: "custody-node".to_string(),
            genesis_path: None,
            log_level: Level::INFO,
        }
    }
}

impl NodeConfig {
    /// Loads configuration from the environment.
    ///
    /// Recognized variables: `CC_NODE_NAME`, `CC_GENESIS` (path),
    /// `CC_LOG_LEVEL` (trace/debug/info/warn/error). Unset or unparsable
    /// values fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("CC_NODE_NAME") {
            config.node_name = name;
        }
        if let Ok(path) = std::env::var("CC_GENESIS") {
            config.genesis_path = Some(PathBuf::from(path));
        }
        if let Ok(level) = std::env::var("CC_LOG_LEVEL") {
            if let Ok(parsed) = level.parse() {
                config.log_level = parsed;
            }
        }

        config
    }
}

// =============================================================================
// TESTS
// =============================================================================
