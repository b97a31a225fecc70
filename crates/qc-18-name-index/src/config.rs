//! # Name Index Configuration
//!
//! Configuration for the Name Index service, including the network's
//! expiration parameters. Loadable from TOML; missing keys take defaults.
//!
//! ```toml
//! default_scan_count = 500
//! history_enabled = true
//! max_undo_depth = 1000
//!
//! [expiration]
//! schedule = { kind = "fixed", depth = 30 }
//! expiry_threshold = 0
//! anchor = "last_update"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::{DEFAULT_MAX_UNDO_DEPTH, DEFAULT_SCAN_COUNT};

/// Blocks a name lives without renewal, as a function of the current height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExpirationSchedule {
    /// Constant depth (regtest uses 30).
    Fixed { depth: u64 },
    /// Main network schedule: 12000 blocks, ramping to 36000 between
    /// heights 24000 and 48000.
    Mainnet,
}

impl ExpirationSchedule {
    /// Expiration depth in force at `height`.
    ///
    /// `height - depth(height)` must be non-decreasing so that names never
    /// "unexpire" as the chain grows.
    pub fn depth_at(&self, height: u64) -> u64 {
        match *self {
            Self::Fixed { depth } => depth,
            Self::Mainnet => {
                if height < 24_000 {
                    12_000
                } else if height < 48_000 {
                    height - 12_000
                } else {
                    36_000
                }
            }
        }
    }
}

/// Which record height the expiration period counts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationAnchor {
    #[default]
    LastUpdate,
    Registration,
}

/// Network expiration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpirationConfig {
    pub schedule: ExpirationSchedule,
    /// A record is expired once `expires_in <= expiry_threshold`.
    pub expiry_threshold: i64,
    pub anchor: ExpirationAnchor,
}

impl Default for ExpirationConfig {
    fn default() -> Self {
        Self {
            schedule: ExpirationSchedule::Mainnet,
            expiry_threshold: 0,
            anchor: ExpirationAnchor::LastUpdate,
        }
    }
}

/// Name index configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameIndexConfig {
    /// Entries returned by `name_scan` when the caller gives no count.
    pub default_scan_count: usize,

    /// Track per-name history (required by `name_history`).
    pub history_enabled: bool,

    /// Blocks of undo data kept for reorgs.
    pub max_undo_depth: usize,

    /// Expiration parameters of the network.
    pub expiration: ExpirationConfig,
}

impl Default for NameIndexConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl NameIndexConfig {
    /// Main network parameters.
    pub fn mainnet() -> Self {
        Self {
            default_scan_count: DEFAULT_SCAN_COUNT,
            history_enabled: true,
            max_undo_depth: DEFAULT_MAX_UNDO_DEPTH,
            expiration: ExpirationConfig::default(),
        }
    }

    /// Regression test network: names expire after 30 blocks.
    pub fn regtest() -> Self {
        Self {
            expiration: ExpirationConfig {
                schedule: ExpirationSchedule::Fixed { depth: 30 },
                ..ExpirationConfig::default()
            },
            ..Self::mainnet()
        }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self::regtest()
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
