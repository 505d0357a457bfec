//! Node definitions
//!
//! Represents the members of a cache cluster.

use std::fmt;

/// A single cache node within the cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    /// DNS name of the node (may be empty)
    pub host: String,

    /// IP address of the node (may be empty)
    pub ip: String,

    /// TCP port the node listens on
    pub port: u16,
}

impl Node {
    /// Create a new node
    pub fn new(host: impl Into<String>, ip: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            ip: ip.into(),
            port,
        }
    }

    /// Connection URL `host:port`, falling back to `ip:port` when the host is empty
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = if self.host.is_empty() { &self.ip } else { &self.host };
        write!(f, "{}:{}", addr, self.port)
    }
}

/// Ordered list of nodes, in protocol response order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    /// Connection URLs of every node, in list order
    pub fn urls(&self) -> Vec<String> {
        self.nodes.iter().map(Node::url).collect()
    }
}

impl From<Vec<Node>> for NodeList {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl IntoIterator for NodeList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
