//! Network Module
//!
//! TCP connection to the cluster configuration endpoint.
//!
//! ## Model
//! - One blocking connection per discovery attempt
//! - Used sequentially: `stats`, then one discovery command
//! - Closed on drop

mod connection;

pub use connection::Connection;
