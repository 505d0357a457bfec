//! Cluster Resolver
//!
//! Resolves the current cluster membership from the configuration endpoint.
//!
//! ## Responsibilities
//! - Look up the endpoint (config or `ELASTICACHE_ENDPOINT`)
//! - Open one TCP connection, closed on every exit path
//! - Run the discovery exchange and parse the node list
//! - Return every node or the first error, never a partial list

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::Result;
use crate::network::Connection;
use crate::protocol::{parse_node_list, DiscoveryDriver, DiscoveryResponse};
use super::NodeList;

/// Resolves cluster nodes through the auto-discovery protocol
///
/// Holds no cached topology: every call performs a fresh round-trip.
#[derive(Debug, Clone)]
pub struct ClusterResolver {
    config: Config,
}

impl ClusterResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolver for the endpoint named by `ELASTICACHE_ENDPOINT`
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connect to the configuration endpoint and resolve the node list
    pub fn resolve_nodes(&self) -> Result<NodeList> {
        let endpoint = self.config.endpoint()?;
        tracing::debug!("Resolving cluster nodes via {}", endpoint);

        let mut connection = Connection::open(&self.config)?;
        let response = connection.discover()?;
        drop(connection);

        let nodes = nodes_from_response(&response)?;
        tracing::info!("Resolved {} cluster node(s) from {}", nodes.len(), endpoint);
        Ok(nodes)
    }
}

/// Resolve the node list using `ELASTICACHE_ENDPOINT`
pub fn resolve_nodes() -> Result<NodeList> {
    ClusterResolver::from_env().resolve_nodes()
}

/// Resolve the node list over an already-open stream
///
/// The caller owns the stream and any deadlines applied to it.
pub fn resolve_nodes_over<S: Read + Write>(stream: S) -> Result<NodeList> {
    let response = DiscoveryDriver::new(stream).discover()?;
    nodes_from_response(&response)
}

fn nodes_from_response(response: &DiscoveryResponse) -> Result<NodeList> {
    tracing::trace!(
        "Discovery response for {:?} (server {}): {:?}",
        response.command.as_str(),
        response.version,
        response.lines
    );
    parse_node_list(&response.lines)
}
