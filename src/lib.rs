//! # ElastiCache Discovery
//!
//! Auto-discovery of memcached cluster members through a configuration
//! endpoint:
//! - Version-gated discovery commands (`config get cluster` or the legacy
//!   `get AmazonElastiCache:cluster`)
//! - Parsing of the `host|ip|port` node list with count validation
//! - A narrow adapter for building a cache client from the resolved nodes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Configuration Endpoint                      │
//! │                (ELASTICACHE_ENDPOINT, TCP)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Discovery Driver                           │
//! │         (stats → version → discovery command)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Stats    │          │  Node List  │
//!   │   Parser    │          │   Parser    │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Client    │
//!                           │  (backend)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cluster;
pub mod network;
pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DiscoveryError, Result};
pub use config::{elasticache, Config, ENDPOINT_ENV_VAR};
pub use cluster::{resolve_nodes, ClusterResolver, Node, NodeList};
pub use client::{BackendItem, CacheBackend, Client, Item};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
