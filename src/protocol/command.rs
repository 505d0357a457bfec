//! Command definitions
//!
//! Text commands sent to the configuration endpoint.

use super::ServerVersion;

/// First server version that understands `config get cluster`
pub const CONFIG_COMMAND_MIN_VERSION: ServerVersion = ServerVersion::new(1, 4, 14);

/// Commands issued during discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Server statistics, used to learn the engine version
    Stats,

    /// Cluster configuration (engine 1.4.14 and later)
    ConfigGetCluster,

    /// Cluster configuration stored under a well-known key (older engines)
    LegacyGetCluster,
}

impl Command {
    /// Wire text of the command, without the CRLF terminator
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Stats => "stats",
            Command::ConfigGetCluster => "config get cluster",
            Command::LegacyGetCluster => "get AmazonElastiCache:cluster",
        }
    }

    /// Select the discovery command a server of the given version understands
    pub fn discovery_for(version: &ServerVersion) -> Self {
        if *version < CONFIG_COMMAND_MIN_VERSION {
            Command::LegacyGetCluster
        } else {
            Command::ConfigGetCluster
        }
    }
}
