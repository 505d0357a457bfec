//! Node list parsing
//!
//! Turns a cluster configuration response into a [`NodeList`].
//!
//! ## Response Shapes
//!
//! Header mode (`config get cluster` / `get AmazonElastiCache:cluster`):
//! ```text
//! CONFIG cluster 0 25
//! 1
//! localhost|127.0.0.1|11211
//!
//! END
//! ```
//! The last token of the nearest non-empty line before the first entry
//! line is the declared node count and must match the number of entries.
//!
//! Bare mode: the first non-empty line already holds entries
//! (`host|foo|1 host|bar|2`). No count is available, so none is checked.

use crate::cluster::{Node, NodeList};
use crate::error::{DiscoveryError, Result};

/// Separator between node entries on a line
pub const NODE_SEPARATOR: char = ' ';

/// Separator between the fields of one node entry
pub const FIELD_SEPARATOR: char = '|';

/// Parse an undivided response block (CRLF or LF separated)
pub fn parse_node_response(response: &str) -> Result<NodeList> {
    let lines: Vec<&str> = response.lines().collect();
    parse_node_list(&lines)
}

/// Parse a response that has already been split into lines
///
/// Lines after an `END` sentinel are ignored.
pub fn parse_node_list<S: AsRef<str>>(lines: &[S]) -> Result<NodeList> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim_end_matches('\r'))
        .take_while(|line| *line != super::END_MARKER)
        .collect();

    let first_entry = lines
        .iter()
        .position(|line| line.contains(FIELD_SEPARATOR))
        .ok_or_else(|| DiscoveryError::protocol("no node entries found"))?;

    let declared = declared_count(&lines[..first_entry])?;

    let entries: Vec<&str> = lines[first_entry..]
        .iter()
        .filter(|line| line.contains(FIELD_SEPARATOR))
        .flat_map(|line| line.split(NODE_SEPARATOR))
        .filter(|entry| !entry.is_empty())
        .collect();

    if let Some(expected) = declared {
        if expected != entries.len() {
            return Err(DiscoveryError::protocol(format!(
                "node count mismatch: expected {}, got {}",
                expected,
                entries.len()
            )));
        }
    }

    let nodes = entries
        .into_iter()
        .map(parse_node_entry)
        .collect::<Result<Vec<_>>>()?;

    Ok(NodeList::new(nodes))
}

/// Parse a single `host|ip|port` entry
pub fn parse_node_entry(entry: &str) -> Result<Node> {
    let invalid = || DiscoveryError::protocol(format!("invalid node entry: {}", entry));

    let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
    let [host, ip, port] = fields[..] else {
        return Err(invalid());
    };

    let port: u16 = port.parse()?;
    if port == 0 || (host.is_empty() && ip.is_empty()) {
        return Err(invalid());
    }

    Ok(Node::new(host, ip, port))
}

/// Declared node count from the header lines preceding the first entry line
///
/// Returns `None` when there is no header (bare mode).
fn declared_count(header: &[&str]) -> Result<Option<usize>> {
    let Some(line) = header.iter().rev().find(|line| !line.trim().is_empty()) else {
        return Ok(None);
    };

    let token = line.split_whitespace().last().unwrap_or_default();
    token
        .parse()
        .map(Some)
        .map_err(|_| DiscoveryError::protocol(format!("invalid node count: {}", token)))
}
