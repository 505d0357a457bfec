//! Protocol Module
//!
//! Client side of the ElastiCache auto-discovery text protocol.
//!
//! ## Exchange
//! ```text
//! client                          configuration endpoint
//!   │  stats\r\n                        │
//!   │ ────────────────────────────────▶ │
//!   │  STAT ... / STAT version x.y.z    │
//!   │  END\r\n                          │
//!   │ ◀──────────────────────────────── │
//!   │  config get cluster\r\n           │   (version >= 1.4.14)
//!   │  get AmazonElastiCache:cluster\r\n│   (older versions)
//!   │ ────────────────────────────────▶ │
//!   │  CONFIG cluster 0 <len>           │
//!   │  <count>                          │
//!   │  host|ip|port host|ip|port ...    │
//!   │  END\r\n                          │
//!   │ ◀──────────────────────────────── │
//! ```

mod command;
mod codec;
mod stats;
mod nodes;
mod driver;

pub use command::{Command, CONFIG_COMMAND_MIN_VERSION};
pub use codec::{read_response, write_command, CRLF, END_MARKER};
pub use stats::{parse_stats, parse_stats_lines, ServerVersion, StatInfo};
pub use nodes::{
    parse_node_entry, parse_node_list, parse_node_response, FIELD_SEPARATOR, NODE_SEPARATOR,
};
pub use driver::{DiscoveryDriver, DiscoveryResponse};
