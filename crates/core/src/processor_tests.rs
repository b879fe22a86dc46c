// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::label::LabelSet;
use std::sync::{Arc, Mutex};
use yare::parameterized;

fn request_for(issue: &Issue, labels: &[&str]) -> ImportRequest {
    let labels: LabelSet = labels.iter().map(|s| s.to_string()).collect();
    ImportRequest::from_issue(issue, labels)
}

#[parameterized(
    general_backlog = { "General Backlog" },
    major_backlog = { "5.x Backlog" },
    short_backlog = { "t.x Backlog" },
)]
fn drop_assignee_for_backlog_version(version: &str) {
    let issue = Issue::new("SPR-1", "Bug", "Open")
        .with_fix_version(version)
        .with_assignee("jhoeller");
    let mut request = request_for(&issue, &[]);

    AssigneeDroppingProcessor::default().before_import(&issue, &mut request);

    assert!(request.issue.assignee.is_none());
    assert_eq!(issue.assignee.as_deref(), Some("jhoeller"));
}

#[parameterized(
    waiting_for_triage = { "status: waiting-for-triage" },
    ideal_for_contribution = { "status: ideal-for-contribution" },
)]
fn drop_assignee_for_label(label: &str) {
    let issue = Issue::new("SPR-1", "Bug", "Open").with_assignee("jhoeller");
    let mut request = request_for(&issue, &[label]);

    AssigneeDroppingProcessor::default().before_import(&issue, &mut request);

    assert!(request.issue.assignee.is_none());
}

#[test]
fn keep_assignee_for_scheduled_issue() {
    let issue = Issue::new("SPR-1", "Bug", "Open")
        .with_fix_version("5.1 GA")
        .with_assignee("jhoeller");
    let mut request = request_for(&issue, &["type: bug"]);

    AssigneeDroppingProcessor::default().before_import(&issue, &mut request);

    assert_eq!(request.issue.assignee.as_deref(), Some("jhoeller"));
}

#[test]
fn truncate_description_of_named_issue() {
    let mut issue = Issue::new("SPR-7640", "Bug", "Open").with_description("x".repeat(1500));
    let disposition = DescriptionTruncatingProcessor::new("SPR-7640", 1000).before_conversion(&mut issue);

    assert_eq!(disposition, Disposition::Keep);
    let description = issue.description.unwrap();
    assert_eq!(description.chars().count(), 1003);
    assert!(description.ends_with("..."));
}

#[test]
fn truncate_counts_characters_not_bytes() {
    let mut issue = Issue::new("SPR-7640", "Bug", "Open").with_description("é".repeat(5));
    DescriptionTruncatingProcessor::new("SPR-7640", 3).before_conversion(&mut issue);
    assert_eq!(issue.description.as_deref(), Some("ééé..."));
}

#[test]
fn truncate_leaves_short_and_other_issues_alone() {
    let processor = DescriptionTruncatingProcessor::new("SPR-7640", 10);

    let mut short = Issue::new("SPR-7640", "Bug", "Open").with_description("short");
    processor.before_conversion(&mut short);
    assert_eq!(short.description.as_deref(), Some("short"));

    let mut other = Issue::new("SPR-1", "Bug", "Open").with_description("x".repeat(50));
    processor.before_conversion(&mut other);
    assert_eq!(other.description.map(|d| d.len()), Some(50));
}

struct Recorder {
    name: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
    skip: bool,
}

impl IssueProcessor for Recorder {
    fn before_conversion(&self, _issue: &mut Issue) -> Disposition {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:conversion", self.name));
        if self.skip {
            Disposition::skip(format!("{} says no", self.name))
        } else {
            Disposition::Keep
        }
    }

    fn before_import(&self, _issue: &Issue, _request: &mut ImportRequest) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:import", self.name));
    }
}

fn recorder(name: &'static str, calls: &Arc<Mutex<Vec<String>>>, skip: bool) -> Recorder {
    Recorder {
        name,
        calls: Arc::clone(calls),
        skip,
    }
}

#[test]
fn composite_runs_processors_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let composite = CompositeIssueProcessor::new()
        .with(recorder("first", &calls, false))
        .with(recorder("second", &calls, false));

    let mut issue = Issue::new("SPR-1", "Bug", "Open");
    assert_eq!(composite.before_conversion(&mut issue), Disposition::Keep);
    let mut request = request_for(&issue, &[]);
    composite.before_import(&issue, &mut request);

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            "first:conversion",
            "second:conversion",
            "first:import",
            "second:import"
        ]
    );
}

#[test]
fn composite_stops_at_first_skip() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let composite = CompositeIssueProcessor::new()
        .with(recorder("first", &calls, true))
        .with(recorder("second", &calls, false));

    let mut issue = Issue::new("SPR-1", "Bug", "Open");
    let disposition = composite.before_conversion(&mut issue);

    assert_eq!(disposition, Disposition::skip("first says no"));
    assert_eq!(*calls.lock().unwrap(), vec!["first:conversion"]);
}

#[test]
fn default_hooks_are_no_ops() {
    struct Nothing;
    impl IssueProcessor for Nothing {}

    let mut issue = Issue::new("SPR-1", "Bug", "Open").with_description("unchanged");
    let before = issue.clone();
    assert_eq!(Nothing.before_conversion(&mut issue), Disposition::Keep);
    assert_eq!(issue, before);

    let mut request = request_for(&issue, &["type: bug"]);
    let expected = request.clone();
    Nothing.before_import(&issue, &mut request);
    assert_eq!(request, expected);
}
