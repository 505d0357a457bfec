//! Cluster Module
//!
//! Cluster membership: the node model and the resolver that fetches it.

mod node;
mod resolver;

pub use node::{Node, NodeList};
pub use resolver::{resolve_nodes, resolve_nodes_over, ClusterResolver};
