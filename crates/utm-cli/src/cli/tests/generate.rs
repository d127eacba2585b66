//! Tests for the generate subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use utm_core::TrackingField;

#[test]
fn cli_parse_generate_minimal() {
    match parse(&[
        "utm",
        "generate",
        "--url",
        "example.com",
        "--source",
        "google",
        "--medium",
        "cpc",
    ]) {
        CliCommand::Generate { urls, fields } => {
            assert_eq!(urls, vec!["example.com".to_string()]);
            let set = fields.to_field_set();
            assert_eq!(set.get(TrackingField::Source), "google");
            assert_eq!(set.get(TrackingField::Medium), "cpc");
            assert_eq!(set.get(TrackingField::Campaign), "");
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_repeated_urls_and_short_flags() {
    match parse(&[
        "utm", "generate", "-u", "a.com", "-u", "b.com", "-s", "fb", "-m", "social", "-c",
        "Black Friday",
    ]) {
        CliCommand::Generate { urls, fields } => {
            assert_eq!(urls, vec!["a.com".to_string(), "b.com".to_string()]);
            assert_eq!(fields.campaign, "Black Friday");
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_all_fields() {
    match parse(&[
        "utm",
        "generate",
        "-u",
        "x.com",
        "--id",
        "42",
        "--source",
        "s",
        "--medium",
        "m",
        "--campaign",
        "c",
        "--term",
        "t",
        "--content",
        "ct",
        "--pmkt",
        "p",
    ]) {
        CliCommand::Generate { fields, .. } => {
            let set = fields.to_field_set();
            let values: Vec<&str> = set.iter().map(|(_, v)| v).collect();
            assert_eq!(values, vec!["42", "s", "m", "c", "t", "ct", "p"]);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_without_urls_is_left_to_validation() {
    match parse(&["utm", "generate", "-s", "a", "-m", "b"]) {
        CliCommand::Generate { urls, .. } => assert!(urls.is_empty()),
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_no_color_is_global() {
    let cli = Cli::try_parse_from(["utm", "history", "--no-color"]).unwrap();
    assert!(cli.no_color);
    let cli = Cli::try_parse_from(["utm", "history"]).unwrap();
    assert!(!cli.no_color);
}
