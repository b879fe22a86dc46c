// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn migrate_defaults_to_stdin() {
    let cli = parse(&["ferry", "migrate"]).unwrap();
    match cli.command {
        Command::Migrate {
            input,
            rules,
            output,
            dry_run,
        } => {
            assert_eq!(input.input, "-");
            assert!(rules.rules.is_none());
            assert!(output.is_none());
            assert!(!dry_run);
        }
        _ => panic!("Expected Migrate command"),
    }
}

#[test]
fn migrate_with_all_options() {
    let cli = parse(&[
        "ferry",
        "migrate",
        "issues.jsonl",
        "-r",
        "rules.toml",
        "-O",
        "out.jsonl",
    ])
    .unwrap();
    match cli.command {
        Command::Migrate {
            input,
            rules,
            output,
            dry_run,
        } => {
            assert_eq!(input.input, "issues.jsonl");
            assert_eq!(rules.rules, Some(PathBuf::from("rules.toml")));
            assert_eq!(output, Some(PathBuf::from("out.jsonl")));
            assert!(!dry_run);
        }
        _ => panic!("Expected Migrate command"),
    }
}

#[test]
fn migrate_dry_run_conflicts_with_output_file() {
    let err = parse(&["ferry", "migrate", "--dry-run", "-O", "out.jsonl"])
        .err()
        .unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    assert!(parse(&["ferry", "migrate", "--dry-run"]).is_ok());
}

#[test]
fn labels_json_output() {
    let cli = parse(&["ferry", "labels", "issues.jsonl", "-o", "json"]).unwrap();
    match cli.command {
        Command::Labels { output, .. } => assert_eq!(output, OutputFormat::Json),
        _ => panic!("Expected Labels command"),
    }
}

#[test]
fn rules_defaults_to_toml() {
    let cli = parse(&["ferry", "rules"]).unwrap();
    match cli.command {
        Command::Rules { output, .. } => assert_eq!(output, RuleFormat::Toml),
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn log_file_is_global() {
    let cli = parse(&["ferry", "check", "--log-file", "ferry.log"]).unwrap();
    assert_eq!(cli.log_file, Some(PathBuf::from("ferry.log")));
    assert!(matches!(cli.command, Command::Check { .. }));
}

#[test]
fn report_requires_committer() {
    assert!(parse(&["ferry", "report", "issues.jsonl"]).is_err());
}

#[test]
fn report_options() {
    let cli = parse(&[
        "ferry",
        "report",
        "issues.jsonl",
        "--committer",
        "alice,bob",
        "--committer",
        "carol",
        "--community-reported",
        "--quiet-for-weeks",
        "2",
        "--order",
        "votes",
        "--top",
        "50",
    ])
    .unwrap();
    match cli.command {
        Command::Report {
            committer,
            filters,
            order,
            top,
            all,
            ..
        } => {
            assert_eq!(committer, vec!["alice", "bob", "carol"]);
            assert!(filters.community_reported);
            assert_eq!(filters.quiet_for_weeks, Some(2));
            assert_eq!(order, ReportOrder::Votes);
            assert_eq!(top, Some(50));
            assert!(!all);
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn report_rejects_contradicting_filters() {
    assert!(parse(&[
        "ferry",
        "report",
        "--committer",
        "alice",
        "--commented",
        "--uncommented",
    ])
    .is_err());
}

#[test]
fn report_rejects_unknown_order() {
    assert!(parse(&["ferry", "report", "--committer", "alice", "--order", "priority"]).is_err());
}

#[test]
fn completion_requires_shell() {
    assert!(parse(&["ferry", "completion"]).is_err());
    assert!(parse(&["ferry", "completion", "zsh"]).is_ok());
}
