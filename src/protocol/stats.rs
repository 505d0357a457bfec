//! Stats parsing
//!
//! Extracts the engine version from a `stats` response. The response may
//! arrive as one undivided block or already split into lines; both go
//! through the same per-line match.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DiscoveryError, Result};

/// Engine version reported by `STAT version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ServerVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }
}

impl FromStr for ServerVersion {
    type Err = DiscoveryError;

    /// Parse `major[.minor[.patch]]`; missing components are zero
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || DiscoveryError::protocol(format!("malformed version: {}", s));

        let mut parts = [0u64; 3];
        let mut count = 0;
        for component in s.split('.') {
            if count == parts.len() || component.is_empty() {
                return Err(malformed());
            }
            if !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            parts[count] = component.parse().map_err(|_| malformed())?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Information extracted from a `stats` response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatInfo {
    pub version: ServerVersion,
}

fn version_regex() -> &'static Regex {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    VERSION_RE.get_or_init(|| {
        Regex::new(r"^STAT version ([0-9.]+)\s*$").expect("version pattern is valid")
    })
}

/// Parse an undivided `stats` response block (CRLF or LF separated)
pub fn parse_stats(response: &str) -> Result<StatInfo> {
    let lines: Vec<&str> = response.lines().collect();
    parse_stats_lines(&lines)
}

/// Parse a `stats` response that has already been split into lines
pub fn parse_stats_lines<S: AsRef<str>>(lines: &[S]) -> Result<StatInfo> {
    let captured = lines
        .iter()
        .find_map(|line| {
            version_regex()
                .captures(line.as_ref())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
        .ok_or_else(|| DiscoveryError::protocol("no version line found"))?;

    let version: ServerVersion = captured.parse()?;
    tracing::trace!("Server version {}", version);

    Ok(StatInfo { version })
}
