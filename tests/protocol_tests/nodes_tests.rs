//! Node List Parser Tests
//!
//! These tests verify:
//! - Header mode with declared count validation
//! - Bare mode (single space-joined line, no count)
//! - Entry field validation and port parsing

use elasticache_discovery::protocol::{parse_node_entry, parse_node_list, parse_node_response};
use elasticache_discovery::{DiscoveryError, Node};

// =============================================================================
// Header Mode Tests
// =============================================================================

#[test]
fn test_single_node_with_header() {
    let data = vec!["CONFIG cluster 0 25", "1", "localhost|127.0.0.1|11211", "", "END"];
    let nodes = parse_node_list(&data).unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes.as_slice()[0], Node::new("localhost", "127.0.0.1", 11211));
}

#[test]
fn test_multiple_nodes_with_header() {
    let response = "CONFIG cluster 0 147\r\n3\r\n\
        a.example.com|10.0.0.1|11211 b.example.com|10.0.0.2|11211 c.example.com|10.0.0.3|11212\r\n\
        \r\nEND\r\n";
    let nodes = parse_node_response(response).unwrap();

    assert_eq!(
        nodes.urls(),
        vec!["a.example.com:11211", "b.example.com:11211", "c.example.com:11212"]
    );
}

#[test]
fn test_count_mismatch_too_few_entries() {
    let data = ["CONFIG cluster 0 25", "2", "localhost|127.0.0.1|11211", ""];
    match parse_node_list(&data) {
        Err(DiscoveryError::Protocol(msg)) => {
            assert_eq!(msg, "node count mismatch: expected 2, got 1")
        }
        other => panic!("Expected count mismatch, got {:?}", other),
    }
}

#[test]
fn test_count_mismatch_too_many_entries() {
    let data = ["CONFIG cluster 0 25", "1", "a|10.0.0.1|1 b|10.0.0.2|2", ""];
    match parse_node_list(&data) {
        Err(DiscoveryError::Protocol(msg)) => {
            assert_eq!(msg, "node count mismatch: expected 1, got 2")
        }
        other => panic!("Expected count mismatch, got {:?}", other),
    }
}

#[test]
fn test_non_integer_count() {
    let data = ["CONFIG cluster", "a|10.0.0.1|1"];
    assert!(matches!(
        parse_node_list(&data),
        Err(DiscoveryError::Protocol(_))
    ));
}

#[test]
fn test_lines_after_end_are_ignored() {
    let data = ["CONFIG cluster 0 25", "1", "a|10.0.0.1|1", "END", "b|10.0.0.2|2"];
    let nodes = parse_node_list(&data).unwrap();
    assert_eq!(nodes.len(), 1);
}

#[test]
fn test_trailing_space_in_entry_line() {
    let data = ["CONFIG cluster 0 25", "2", "a|10.0.0.1|1 b|10.0.0.2|2 ", ""];
    assert_eq!(parse_node_list(&data).unwrap().len(), 2);
}

#[test]
fn test_no_entries() {
    let data = ["CONFIG cluster 0 25", "0", "", "END"];
    match parse_node_list(&data) {
        Err(DiscoveryError::Protocol(msg)) => assert_eq!(msg, "no node entries found"),
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

// =============================================================================
// Bare Mode Tests
// =============================================================================

#[test]
fn test_bare_line_keeps_order() {
    let data = vec!["host|foo|1 host|bar|2 host|baz|3"];
    let nodes = parse_node_list(&data).unwrap();

    let expected = vec![
        Node::new("host", "foo", 1),
        Node::new("host", "bar", 2),
        Node::new("host", "baz", 3),
    ];
    assert_eq!(nodes.as_slice(), expected.as_slice());
}

#[test]
fn test_bare_line_after_blank_lines() {
    let nodes = parse_node_response("\r\n\r\nhost|foo|1 host|bar|2\r\n").unwrap();
    assert_eq!(nodes.len(), 2);
}

#[test]
fn test_bare_line_with_bad_entry() {
    let data = ["host|foo|1 host|bar"];
    assert!(matches!(
        parse_node_list(&data),
        Err(DiscoveryError::Protocol(_))
    ));
}

#[test]
fn test_parsing_is_deterministic() {
    let data = ["CONFIG cluster 0 25", "2", "a|10.0.0.1|1 b|10.0.0.2|2", ""];
    assert_eq!(parse_node_list(&data).unwrap(), parse_node_list(&data).unwrap());
}

// =============================================================================
// Entry Tests
// =============================================================================

#[test]
fn test_entry_three_fields() {
    let node = parse_node_entry("host|foo|1").unwrap();
    assert_eq!(node, Node::new("host", "foo", 1));
}

#[test]
fn test_entry_two_fields() {
    match parse_node_entry("host|foo") {
        Err(DiscoveryError::Protocol(msg)) => assert_eq!(msg, "invalid node entry: host|foo"),
        other => panic!("Expected invalid entry, got {:?}", other),
    }
}

#[test]
fn test_entry_four_fields() {
    assert!(matches!(
        parse_node_entry("host|foo|1|extra"),
        Err(DiscoveryError::Protocol(_))
    ));
}

#[test]
fn test_entry_non_numeric_port() {
    assert!(matches!(
        parse_node_entry("host|foo|abc"),
        Err(DiscoveryError::Parse(_))
    ));
}

#[test]
fn test_entry_port_out_of_range() {
    assert!(matches!(
        parse_node_entry("host|foo|70000"),
        Err(DiscoveryError::Parse(_))
    ));
}

#[test]
fn test_entry_zero_port() {
    assert!(matches!(
        parse_node_entry("host|foo|0"),
        Err(DiscoveryError::Protocol(_))
    ));
}

#[test]
fn test_entry_without_host_or_ip() {
    assert!(matches!(
        parse_node_entry("||11211"),
        Err(DiscoveryError::Protocol(_))
    ));
}

#[test]
fn test_non_numeric_port_fails_whole_list() {
    let data = ["CONFIG cluster 0 25", "2", "a|10.0.0.1|1 b|10.0.0.2|x", ""];
    assert!(matches!(
        parse_node_list(&data),
        Err(DiscoveryError::Parse(_))
    ));
}
