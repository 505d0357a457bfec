//! Client Module
//!
//! Builds a cache client from the discovered cluster nodes.
//!
//! The cache client itself comes from elsewhere and is reached only through
//! [`CacheBackend`]: construct from `host:port` URLs, store an item. Key
//! distribution across nodes is the backend's job.

mod item;

pub use item::Item;

use crate::cluster::{ClusterResolver, NodeList};
use crate::config::Config;
use crate::error::Result;

/// Item representation owned by a cache backend
///
/// Data only flows into it; it is never read back.
pub trait BackendItem {
    fn from_parts(key: String, value: Vec<u8>, expiration: i32) -> Self;
}

/// The capabilities this crate needs from a cache client library
pub trait CacheBackend: Sized {
    type Item: BackendItem;
    type Error;

    /// Build a client spanning the given `host:port` servers
    fn from_servers(servers: Vec<String>) -> Self;

    /// Store an item
    fn set(&self, item: Self::Item) -> std::result::Result<(), Self::Error>;
}

/// Cache client for a discovered cluster
#[derive(Debug)]
pub struct Client<B: CacheBackend> {
    backend: B,
}

impl<B: CacheBackend> Client<B> {
    /// Discover the cluster named by `ELASTICACHE_ENDPOINT` and build a client for it
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::from_env())
    }

    /// Discover the cluster using the given config and build a client for it
    pub fn with_config(config: &Config) -> Result<Self> {
        let nodes = ClusterResolver::new(config.clone()).resolve_nodes()?;
        Ok(Self::from_nodes(&nodes))
    }

    /// Build a client for an already-resolved node list
    pub fn from_nodes(nodes: &NodeList) -> Self {
        let servers = nodes.urls();
        tracing::debug!("Creating cache client for servers {:?}", servers);

        Self {
            backend: B::from_servers(servers),
        }
    }

    /// Store an item, returning the backend's error unchanged
    pub fn set(&self, item: &Item) -> std::result::Result<(), B::Error> {
        self.backend.set(<B::Item as BackendItem>::from_parts(
            item.key.clone(),
            item.value.clone(),
            item.expiration,
        ))
    }

    /// The underlying cache client
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
