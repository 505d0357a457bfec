//! Stats Parser Tests
//!
//! Version extraction from `stats` responses, as a block and as lines.

use elasticache_discovery::protocol::{parse_stats, parse_stats_lines, ServerVersion};
use elasticache_discovery::DiscoveryError;

#[test]
fn test_version_from_block() {
    let stats = parse_stats("STAT version 1.4.14\r\nSTAT pid 7\r\nEND").unwrap();
    assert_eq!(stats.version, ServerVersion::new(1, 4, 14));
}

#[test]
fn test_version_from_lines() {
    let lines = vec!["STAT pid 7", "STAT uptime 100", "STAT version 1.6.6"];
    let stats = parse_stats_lines(&lines).unwrap();
    assert_eq!(stats.version, ServerVersion::new(1, 6, 6));
}

#[test]
fn test_version_with_trailing_whitespace() {
    let stats = parse_stats("STAT pid 7\nSTAT version 1.5.10  \nEND\n").unwrap();
    assert_eq!(stats.version.to_string(), "1.5.10");
}

#[test]
fn test_missing_version_line() {
    match parse_stats("STAT pid 7\r\nSTAT uptime 100\r\nEND") {
        Err(DiscoveryError::Protocol(msg)) => assert_eq!(msg, "no version line found"),
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

#[test]
fn test_version_line_must_match_whole_line() {
    // Prefixed or non-numeric version lines are not version lines
    let lines = ["XSTAT version 1.4.14", "STAT version 1.4.14-beta", "STAT versions 1.4.14"];
    assert!(matches!(
        parse_stats_lines(&lines),
        Err(DiscoveryError::Protocol(_))
    ));
}

#[test]
fn test_malformed_version() {
    match parse_stats("STAT version 1..4\r\nEND") {
        Err(DiscoveryError::Protocol(msg)) => assert!(msg.starts_with("malformed version")),
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

#[test]
fn test_empty_response() {
    let lines: Vec<String> = Vec::new();
    assert!(parse_stats_lines(&lines).is_err());
    assert!(parse_stats("").is_err());
}
