//! # Domain Errors
//!
//! Error types for the Name Index subsystem.
//!
//! Every query error maps onto a stable RPC code. Callers rely on the
//! "not synchronized" and "bad argument" codes, so those two never change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hash type alias (32-byte transaction id)
pub type Hash = [u8; 32];

/// Errors raised by the record store collaborator.
///
/// These are propagated through queries unchanged and are never retried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A block was connected out of order.
    #[error("Block height mismatch: expected {expected}, got {got}")]
    HeightMismatch {
        /// Height the store expected next
        expected: u64,
        /// Height that was supplied
        got: u64,
    },

    /// Disconnect requested on an empty chain.
    #[error("No block to disconnect")]
    NothingToDisconnect,

    /// Undo data for this height has already been pruned.
    #[error("Reorg too deep: no undo data for height {height}")]
    ReorgTooDeep {
        /// Height whose undo data is missing
        height: u64,
    },

    /// An update named a record that does not exist.
    #[error("Update for unregistered name '{name}' at height {height}")]
    UnknownName {
        /// Display form of the name
        name: String,
        /// Height of the offending block
        height: u64,
    },

    /// Underlying I/O or corruption failure.
    #[error("Store I/O error: {0}")]
    Io(String),
}

/// Name index query errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameIndexError {
    /// Node is still in initial block download.
    #[error("Namecoin is downloading blocks...")]
    NotReady,

    /// Malformed pattern, unknown output mode or out-of-range number.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Name lookup found no record.
    #[error("name not found: '{0}'")]
    NameNotFound(String),

    /// History lookups need history tracking enabled.
    #[error("name history is not enabled")]
    HistoryDisabled,

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl NameIndexError {
    /// Stable RPC code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotReady => RpcErrorCode::ClientInInitialDownload as i32,
            Self::InvalidArgument(_) => RpcErrorCode::InvalidParameter as i32,
            Self::NameNotFound(_) => RpcErrorCode::NotFound as i32,
            Self::HistoryDisabled => RpcErrorCode::MiscError as i32,
            Self::Store(_) => RpcErrorCode::DatabaseError as i32,
        }
    }

    /// Shorthand for [`NameIndexError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// RPC error codes as reported by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RpcErrorCode {
    MiscError = -1,
    NotFound = -4,
    InvalidParameter = -8,
    ClientInInitialDownload = -10,
    DatabaseError = -20,
    MethodNotFound = -32601,
}

/// Serializable `(code, message)` pair returned to RPC callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: RpcErrorCode::MethodNotFound as i32,
            message: format!("Method not found: {}", method),
        }
    }
}

impl From<NameIndexError> for RpcError {
    fn from(err: NameIndexError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}
