//! Protocol codec
//!
//! Line-oriented I/O for the text protocol.
//!
//! ## Wire Format
//!
//! ```text
//! request:   <command>\r\n
//! response:  <line>\r\n
//!            <line>\r\n
//!            ...
//!            END\r\n
//! ```
//!
//! Error replies (`ERROR`, `CLIENT_ERROR <msg>`, `SERVER_ERROR <msg>`) are a
//! single line with no `END` after them.

use std::io::{self, BufRead, Write};

use crate::error::{DiscoveryError, Result};
use super::Command;

/// Line terminating every command
pub const CRLF: &str = "\r\n";

/// Sentinel line ending every successful response
pub const END_MARKER: &str = "END";

/// Write a command followed by CRLF and flush
pub fn write_command<W: Write>(writer: &mut W, command: Command) -> Result<()> {
    tracing::trace!("Sending command: {}", command.as_str());

    writer.write_all(command.as_str().as_bytes())?;
    writer.write_all(CRLF.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read response lines up to (not including) the `END` sentinel
///
/// Blocks until the sentinel arrives or the transport fails. End of stream
/// before the sentinel is reported as `UnexpectedEof`.
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(DiscoveryError::Connection(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed before END",
            )));
        }

        let line = buf.trim_end_matches(['\r', '\n']);
        tracing::trace!("Received line: {:?}", line);

        if line == END_MARKER {
            return Ok(lines);
        }
        if is_error_reply(line) {
            tracing::warn!("Server returned error reply: {}", line);
            return Err(DiscoveryError::protocol(format!("server error: {}", line)));
        }

        lines.push(line.to_string());
    }
}

fn is_error_reply(line: &str) -> bool {
    line == "ERROR" || line.starts_with("CLIENT_ERROR ") || line.starts_with("SERVER_ERROR ")
}
