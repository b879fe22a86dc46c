// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::output;
use crate::config::parse_rules;

#[test]
fn toml_output_parses_back() {
    let mut buf = Vec::new();
    run_impl(&RuleSet::spring_framework(), RuleFormat::Toml, &mut buf).unwrap();
    let out = output(buf);

    assert!(out.contains("[[mappings]]"));
    assert!(out.contains("starts_with = "));
    assert_eq!(
        parse_rules(&out, RuleFormat::Toml, "stdout").unwrap(),
        RuleSet::spring_framework()
    );
}

#[test]
fn json_output_ends_with_newline() {
    let mut buf = Vec::new();
    run_impl(&RuleSet::default(), RuleFormat::Json, &mut buf).unwrap();
    let out = output(buf);
    assert!(out.starts_with('{'));
    assert!(out.ends_with("}\n"));
}
