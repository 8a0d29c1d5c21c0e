//! Tests for serve, convert and the global --config flag.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_serve() {
    match parse(&["imgdl", "serve"]) {
        CliCommand::Serve { bind, insecure } => {
            assert!(bind.is_none());
            assert!(!insecure);
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_bind() {
    match parse(&["imgdl", "serve", "--bind", "0.0.0.0:8080"]) {
        CliCommand::Serve { bind, .. } => assert_eq!(bind.as_deref(), Some("0.0.0.0:8080")),
        _ => panic!("expected Serve with --bind"),
    }
}

#[test]
fn cli_parse_convert() {
    match parse(&["imgdl", "convert", "sheet.xlsx"]) {
        CliCommand::Convert { file, out } => {
            assert_eq!(file, Path::new("sheet.xlsx"));
            assert!(out.is_none());
        }
        _ => panic!("expected Convert"),
    }
}

#[test]
fn cli_parse_convert_out() {
    match parse(&["imgdl", "convert", "in.csv", "--out", "out.csv"]) {
        CliCommand::Convert { out, .. } => assert_eq!(out.as_deref(), Some(Path::new("out.csv"))),
        _ => panic!("expected Convert with --out"),
    }
}

#[test]
fn cli_parse_convert_requires_file() {
    assert!(Cli::try_parse_from(["imgdl", "convert"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["imgdl", "fetch", "--config", "/etc/imgdl.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/imgdl.toml")));
}
