// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn new_issue_is_unresolved_and_unversioned() {
    let issue = Issue::new("SPR-1", "Bug", "Open");
    assert_eq!(issue.key, "SPR-1");
    assert!(issue.resolution.is_none());
    assert!(issue.fix_version.is_none());
    assert!(issue.backport_versions.is_empty());
    assert_eq!(issue.votes, 0);
}

#[test]
fn assign_versions_splits_fix_and_backports() {
    let mut issue = Issue::new("SPR-1", "Bug", "Resolved");
    issue.assign_versions(vec!["5.1 RC1".into(), "5.0.9".into(), "4.3.19".into()]);

    assert_eq!(issue.fix_version, Some(Version::new("5.1 RC1")));
    assert_eq!(
        issue.backport_versions,
        vec![Version::new("5.0.9"), Version::new("4.3.19")]
    );
}

#[test]
fn assign_versions_empty_clears_both() {
    let mut issue = Issue::new("SPR-1", "Bug", "Open")
        .with_fix_version("5.x Backlog")
        .with_backport("4.3.x");
    issue.assign_versions(Vec::new());

    assert!(issue.fix_version.is_none());
    assert!(issue.backport_versions.is_empty());
}

#[test]
fn version_names_lists_fix_version_first() {
    let issue = Issue::new("SPR-1", "Bug", "Resolved")
        .with_fix_version("5.1")
        .with_backport("5.0.9");
    let names: Vec<&str> = issue.version_names().collect();
    assert_eq!(names, vec!["5.1", "5.0.9"]);
}

#[test]
fn deserialize_minimal_record() {
    let issue: Issue =
        serde_json::from_str(r#"{"key":"SPR-2","issue_type":"Task","status":"Open"}"#).unwrap();
    assert_eq!(issue, Issue::new("SPR-2", "Task", "Open"));
}

#[test]
fn deserialize_raw_fix_versions_list() {
    let issue: Issue = serde_json::from_str(
        r#"{"key":"SPR-3","issue_type":"Bug","status":"Closed",
            "fix_versions":[{"name":"5.0 GA"},{"name":"4.3.10"}]}"#,
    )
    .unwrap();
    assert_eq!(issue.fix_version, Some(Version::new("5.0 GA")));
    assert_eq!(issue.backport_versions, vec![Version::new("4.3.10")]);
}

#[yare::parameterized(
    with_fix_version = { r#""fix_version":{"name":"5.1"}"# },
    with_backports = { r#""backport_versions":[{"name":"4.3.19"}]"# },
)]
fn raw_list_mixed_with_split_versions_is_rejected(split: &str) {
    let json = format!(
        r#"{{"key":"SPR-4","issue_type":"Bug","status":"Closed",{},"fix_versions":[{{"name":"5.0"}}]}}"#,
        split
    );
    let err = serde_json::from_str::<Issue>(&json).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("issue SPR-4"), "{}", msg);
    assert!(msg.contains("not both"), "{}", msg);
}

#[test]
fn serialize_round_trip_keeps_split_versions() {
    let issue = Issue::new("SPR-5", "Bug", "Closed")
        .with_resolution("Fixed")
        .with_fix_version("5.1")
        .with_backport("5.0.9")
        .with_tag("Regression")
        .with_votes(3);
    let json = serde_json::to_string(&issue).unwrap();
    assert!(!json.contains("fix_versions"));
    let parsed: Issue = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, issue);
}

#[test]
fn last_comment_is_most_recent() {
    let now = Utc::now();
    let issue = Issue::new("SPR-6", "Bug", "Open")
        .with_comment(Comment::new("alice", now))
        .with_comment(Comment::new("bob", now));
    assert_eq!(issue.last_comment().map(|c| c.author.as_str()), Some("bob"));
}
