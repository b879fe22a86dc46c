// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn ferry() -> Command {
    let mut cmd = cargo_bin_cmd!("ferry");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Issues exercising the built-in rules, one JSON object per line.
pub const ISSUES: &str = r#"{"key":"SPR-1","issue_type":"Bug","status":"Closed","resolution":"Won't Fix","summary":"Declined bug"}
{"key":"SPR-2","issue_type":"Bug","status":"Open","tags":["Regression"],"summary":"Untriaged regression","assignee":"jhoeller","reporter":"alice","created":"2017-01-01T00:00:00Z"}
{"key":"SPR-3","issue_type":"Improvement","status":"Open","fix_versions":[{"name":"5.x Backlog"}],"assignee":"jhoeller"}
{"key":"SPR-4","issue_type":"New Feature","status":"Open","fix_versions":[{"name":"5.1 GA"},{"name":"5.0.9"}],"votes":12}
"#;

/// Temp directory holding `issues.jsonl`.
pub fn with_issues() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.jsonl");
    std::fs::write(&path, ISSUES).unwrap();
    (temp, path)
}
