//! Configuration for ElastiCache discovery
//!
//! Centralized configuration with sensible defaults. The configuration
//! endpoint normally comes from the `ELASTICACHE_ENDPOINT` environment
//! variable.

use std::time::Duration;

use crate::error::{DiscoveryError, Result};

/// Environment variable naming the cluster configuration endpoint (`host:port`)
pub const ENDPOINT_ENV_VAR: &str = "ELASTICACHE_ENDPOINT";

/// Main configuration for cluster discovery
#[derive(Debug, Clone, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Configuration endpoint address (`host:port`)
    pub endpoint: Option<String>,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    // A value of 0 leaves the socket in plain blocking mode.
    /// Connect timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Connection read timeout (milliseconds)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds)
    pub write_timeout_ms: u64,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config with the endpoint taken from `ELASTICACHE_ENDPOINT`
    pub fn from_env() -> Self {
        Self {
            endpoint: endpoint_from_env(),
            ..Self::default()
        }
    }

    /// The configured endpoint, or a configuration error if none is set
    pub fn endpoint(&self) -> Result<&str> {
        match self.endpoint.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => Ok(endpoint),
            _ => Err(endpoint_not_set()),
        }
    }

    pub(crate) fn connect_timeout(&self) -> Option<Duration> {
        millis(self.connect_timeout_ms)
    }

    pub(crate) fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }

    pub(crate) fn write_timeout(&self) -> Option<Duration> {
        millis(self.write_timeout_ms)
    }
}

/// Look up the configuration endpoint from the environment
///
/// Returns a configuration error when `ELASTICACHE_ENDPOINT` is missing or empty.
pub fn elasticache() -> Result<String> {
    endpoint_from_env().ok_or_else(endpoint_not_set)
}

fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV_VAR)
        .ok()
        .filter(|endpoint| !endpoint.is_empty())
}

fn endpoint_not_set() -> DiscoveryError {
    DiscoveryError::Config("endpoint not set".to_string())
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the configuration endpoint (`host:port`)
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
