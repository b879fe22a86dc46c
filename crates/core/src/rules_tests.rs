// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn labels(items: &[&str]) -> LabelSet {
    items.iter().map(|s| s.to_string()).collect()
}

#[parameterized(
    equals_hit = { LabelPattern::Equals("type: bug".into()), "type: bug", true },
    equals_miss = { LabelPattern::Equals("type: bug".into()), "type: bugfix", false },
    prefix_hit = { LabelPattern::StartsWith("type: ".into()), "type: task", true },
    prefix_miss = { LabelPattern::StartsWith("type: ".into()), "status: declined", false },
    regex_hit = { LabelPattern::regex("^type: (bug|regression)$").unwrap(), "type: regression", true },
    regex_miss = { LabelPattern::regex("^type: (bug|regression)$").unwrap(), "type: task", false },
)]
fn pattern_matches(pattern: LabelPattern, label: &str, expected: bool) {
    assert_eq!(pattern.matches(label), expected);
}

#[test]
fn invalid_regex_is_rejected() {
    let err = LabelPattern::regex("type: (").unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "type: ("));
}

#[test]
fn supersede_removes_dominated_when_both_present() {
    let rule = SupersedeRule::new("type: bug", "type: regression");
    let mut set = labels(&["type: bug", "type: regression"]);
    assert!(rule.apply(&mut set));
    assert_eq!(set, labels(&["type: bug"]));
}

#[parameterized(
    only_dominant = { &["type: bug"] },
    only_dominated = { &["type: regression"] },
    neither = { &["status: declined"] },
)]
fn supersede_leaves_single_label_alone(present: &[&str]) {
    let rule = SupersedeRule::new("type: bug", "type: regression");
    let mut set = labels(present);
    assert!(!rule.apply(&mut set));
    assert_eq!(set, labels(present));
}

#[test]
fn removal_strips_matches_but_not_trigger() {
    let rule = RemovalRule::new(
        "type: anything",
        LabelPattern::StartsWith("type: ".into()),
    );
    let mut set = labels(&["type: anything", "type: bug", "type: task", "has: backports"]);
    let removed = rule.apply(&mut set);

    assert_eq!(removed, vec!["type: bug".to_string(), "type: task".to_string()]);
    assert_eq!(set, labels(&["type: anything", "has: backports"]));
}

#[test]
fn removal_without_trigger_does_nothing() {
    let rule = RemovalRule::new(
        "status: waiting-for-triage",
        LabelPattern::StartsWith("type: ".into()),
    );
    let mut set = labels(&["type: bug", "status: declined"]);
    assert!(rule.apply(&mut set).is_empty());
    assert_eq!(set, labels(&["type: bug", "status: declined"]));
}

#[test]
fn pattern_equality_compares_regex_source() {
    assert_eq!(
        LabelPattern::regex("^type: ").unwrap(),
        LabelPattern::regex("^type: ").unwrap()
    );
    assert_ne!(
        LabelPattern::StartsWith("type: ".into()),
        LabelPattern::Equals("type: ".into())
    );
}

#[test]
fn pattern_display() {
    assert_eq!(
        LabelPattern::StartsWith("type: ".into()).to_string(),
        "starts with 'type: '"
    );
    assert_eq!(
        LabelPattern::Equals("type: bug".into()).to_string(),
        "= 'type: bug'"
    );
}
