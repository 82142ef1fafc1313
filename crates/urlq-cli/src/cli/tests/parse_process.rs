//! Tests for the parse and process subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["urlq", "parse", "https://example.com/path?query=value"]) {
        CliCommand::Parse { url, json } => {
            assert_eq!(url, "https://example.com/path?query=value");
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json() {
    match parse(&["urlq", "parse", "https://example.com/x", "--json"]) {
        CliCommand::Parse { url, json } => {
            assert_eq!(url, "https://example.com/x");
            assert!(json);
        }
        _ => panic!("expected Parse with --json"),
    }
}

#[test]
fn cli_parse_process() {
    match parse(&["urlq", "process", "https://a.com", "not a url", "https://b.com/x"]) {
        CliCommand::Process { urls, json } => {
            assert_eq!(urls, ["https://a.com", "not a url", "https://b.com/x"]);
            assert!(!json);
        }
        _ => panic!("expected Process"),
    }
}

#[test]
fn cli_parse_process_json() {
    match parse(&["urlq", "process", "--json", "https://a.com"]) {
        CliCommand::Process { urls, json } => {
            assert_eq!(urls, ["https://a.com"]);
            assert!(json);
        }
        _ => panic!("expected Process with --json"),
    }
}

#[test]
fn cli_parse_process_requires_urls() {
    assert!(crate::cli::Cli::try_parse_from(["urlq", "process"]).is_err());
}
