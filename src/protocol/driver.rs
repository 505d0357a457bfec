//! Discovery driver
//!
//! Runs the version-gated command sequence over one open connection:
//! `stats` first, then whichever cluster configuration command the
//! server version supports.

use std::io::{BufReader, Read, Write};

use crate::error::Result;
use super::{parse_stats_lines, read_response, write_command, Command, ServerVersion};

/// Drives the discovery exchange over a full-duplex byte stream
///
/// The same buffered reader is kept for the whole exchange, so bytes read
/// ahead while handling one response are not lost for the next.
pub struct DiscoveryDriver<S: Read + Write> {
    stream: BufReader<S>,
}

/// Raw outcome of a discovery exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryResponse {
    /// Version reported by the server
    pub version: ServerVersion,

    /// Command that produced `lines`
    pub command: Command,

    /// Response lines, without the `END` sentinel
    pub lines: Vec<String>,
}

impl<S: Read + Write> DiscoveryDriver<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
        }
    }

    /// Send one command and collect its response lines
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        write_command(self.stream.get_mut(), command)?;
        read_response(&mut self.stream)
    }

    /// Query the server version via `stats`
    pub fn server_version(&mut self) -> Result<ServerVersion> {
        let lines = self.execute(Command::Stats)?;
        Ok(parse_stats_lines(&lines)?.version)
    }

    /// Run `stats`, then the matching discovery command
    pub fn discover(&mut self) -> Result<DiscoveryResponse> {
        let version = self.server_version()?;
        let command = Command::discovery_for(&version);
        tracing::debug!("Server version {}, using {:?}", version, command.as_str());

        let lines = self.execute(command)?;
        Ok(DiscoveryResponse {
            version,
            command,
            lines,
        })
    }

    pub fn get_ref(&self) -> &S {
        self.stream.get_ref()
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> S {
        self.stream.into_inner()
    }
}
