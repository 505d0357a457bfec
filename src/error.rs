//! Error types for ElastiCache discovery
//!
//! Provides a unified error type for all discovery operations.

use thiserror::Error;

/// Result type alias using DiscoveryError
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Unified error type for discovery operations
#[derive(Debug, Error)]
pub enum DiscoveryError {
    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    /// Dial, read or write failure on the configuration endpoint connection
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    /// Non-numeric port in a node entry
    #[error("Parse error: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

impl DiscoveryError {
    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        DiscoveryError::Protocol(message.into())
    }
}
