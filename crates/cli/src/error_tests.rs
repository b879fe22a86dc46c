// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn core_errors_keep_their_message() {
    let err: Error = ferry_core::Error::invalid_argument("issue key must not be empty").into();
    assert_eq!(err.to_string(), "invalid argument: issue key must not be empty");
}

#[test]
fn unsupported_rule_file_has_hint() {
    let err = Error::UnsupportedRuleFile {
        path: "rules.yaml".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("rules.yaml"));
    assert!(msg.contains("hint: rule files must end in .toml or .json"));
}

#[test]
fn parse_line_error_names_line() {
    let err = Error::ParseLineError {
        line: 3,
        reason: "missing field `key`".to_string(),
    };
    assert_eq!(err.to_string(), "line 3: missing field `key`");
}

#[test]
fn conflicting_rules_points_to_check() {
    let msg = Error::ConflictingRules(2).to_string();
    assert!(msg.contains("2 conflict(s)"));
    assert!(msg.contains("ferry check"));
}

#[test]
fn partial_failure_counts() {
    let err = Error::PartialFailure {
        succeeded: 4,
        failed: 1,
    };
    assert_eq!(
        err.to_string(),
        "some issues failed to migrate: 4 succeeded, 1 failed"
    );
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("gone"));
}
