//! Tests for the fetch subcommand.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["imgdl", "fetch"]) {
        CliCommand::Fetch {
            links,
            names,
            out,
            insecure,
        } => {
            assert!(links.is_none());
            assert!(names.is_none());
            assert!(out.is_none());
            assert!(!insecure);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_paths() {
    match parse(&[
        "imgdl",
        "fetch",
        "--links",
        "links.txt",
        "--names",
        "names.txt",
        "--out",
        "/tmp/images",
    ]) {
        CliCommand::Fetch {
            links, names, out, ..
        } => {
            assert_eq!(links.as_deref(), Some(Path::new("links.txt")));
            assert_eq!(names.as_deref(), Some(Path::new("names.txt")));
            assert_eq!(out.as_deref(), Some(Path::new("/tmp/images")));
        }
        _ => panic!("expected Fetch with paths"),
    }
}

#[test]
fn cli_parse_fetch_insecure() {
    match parse(&["imgdl", "fetch", "--insecure"]) {
        CliCommand::Fetch { insecure, .. } => assert!(insecure),
        _ => panic!("expected Fetch with --insecure"),
    }
}
