// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::label::LabelFactory;
use crate::mapping::{FieldKind, FieldValueLabelHandler};

fn labels(items: &[&str]) -> LabelSet {
    items.iter().map(|s| s.to_string()).collect()
}

fn type_table() -> FieldValueLabelHandler {
    let mut table = FieldValueLabelHandler::new();
    table.add_mapping(FieldKind::IssueType, "Bug", "bug");
    table.add_mapping(FieldKind::Resolution, "Won't Fix", "declined");
    table.add_mapping_with(FieldKind::Tag, "Regression", "regression", LabelFactory::Type);
    table
}

fn handler() -> CompositeLabelHandler {
    let mut handler = CompositeLabelHandler::new();
    handler.add_handler(type_table());
    handler.add_predicate(LabelFactory::Status.create("waiting-for-triage"), |issue| {
        issue.resolution.is_none() && issue.fix_version.is_none()
    });
    handler.add_predicate(LabelFactory::Has.create("votes-jira"), |issue| {
        issue.votes >= 10
    });
    handler.add_supersede("type: bug", "type: regression");
    handler.add_removal(
        "status: waiting-for-triage",
        LabelPattern::StartsWith("type: ".into()),
    );
    handler.add_removal("status: declined", LabelPattern::Equals("type: bug".into()));
    handler.add_removal(
        "status: declined",
        LabelPattern::Equals("type: regression".into()),
    );
    handler
}

#[test]
fn empty_handler_yields_empty_set() {
    let handler = CompositeLabelHandler::new();
    assert!(handler
        .compute_labels(&Issue::new("SPR-1", "Bug", "Open"))
        .is_empty());
}

#[test]
fn contributions_are_unioned() {
    let issue = Issue::new("SPR-1", "Bug", "Resolved")
        .with_resolution("Fixed")
        .with_votes(15);
    assert_eq!(
        handler().compute_labels(&issue),
        labels(&["has: votes-jira", "type: bug"])
    );
}

#[test]
fn compute_labels_is_deterministic() {
    let handler = handler();
    let issue = Issue::new("SPR-1", "Bug", "Open")
        .with_tag("Regression")
        .with_votes(11);
    let first = handler.compute_labels(&issue);
    let second = handler.compute_labels(&issue);
    assert_eq!(first, second);
}

#[test]
fn handler_registration_order_does_not_matter() {
    let votes = || {
        PredicateLabelHandler::new(LabelFactory::Has.create("votes-jira"), |issue: &Issue| {
            issue.votes >= 10
        })
    };
    let backports = || {
        PredicateLabelHandler::new(LabelFactory::Has.create("backports"), |issue: &Issue| {
            !issue.backport_versions.is_empty()
        })
    };

    let mut forward = CompositeLabelHandler::new();
    forward.add_handler(type_table());
    forward.add_handler(votes());
    forward.add_handler(backports());

    let mut reverse = CompositeLabelHandler::new();
    reverse.add_handler(backports());
    reverse.add_handler(votes());
    reverse.add_handler(type_table());

    let issues = [
        Issue::new("SPR-1", "Bug", "Open").with_votes(30),
        Issue::new("SPR-2", "Bug", "Closed")
            .with_resolution("Fixed")
            .with_fix_version("5.1")
            .with_backport("5.0.9"),
        Issue::new("SPR-3", "Task", "Open").with_tag("Regression"),
    ];
    for issue in &issues {
        assert_eq!(forward.compute_labels(issue), reverse.compute_labels(issue));
    }
}

#[test]
fn supersede_keeps_dominant_drops_dominated() {
    let issue = Issue::new("SPR-1", "Bug", "Resolved")
        .with_resolution("Fixed")
        .with_tag("Regression");
    let result = handler().compute_labels(&issue);
    assert!(result.contains("type: bug"));
    assert!(!result.contains("type: regression"));
}

#[test]
fn supersede_leaves_dominated_without_dominant() {
    let issue = Issue::new("SPR-1", "Task", "Resolved")
        .with_resolution("Fixed")
        .with_tag("Regression");
    assert_eq!(
        handler().compute_labels(&issue),
        labels(&["type: regression"])
    );
}

#[test]
fn removal_fires_only_with_trigger() {
    let fixed = Issue::new("SPR-1", "Bug", "Resolved").with_resolution("Fixed");
    assert!(handler().compute_labels(&fixed).contains("type: bug"));

    let declined = Issue::new("SPR-2", "Bug", "Resolved").with_resolution("Won't Fix");
    assert_eq!(
        handler().compute_labels(&declined),
        labels(&["status: declined"])
    );
}

#[test]
fn triage_removal_strips_all_type_labels() {
    let issue = Issue::new("SPR-1", "Bug", "Open").with_tag("Regression");
    assert_eq!(
        handler().compute_labels(&issue),
        labels(&["status: waiting-for-triage"])
    );
}

#[test]
fn removal_keyed_on_superseded_label_is_not_reconsidered() {
    let mut handler = CompositeLabelHandler::new();
    handler.add_predicate(Label::new("a"), |_| true);
    handler.add_predicate(Label::new("b"), |_| true);
    handler.add_predicate(Label::new("c"), |_| true);
    handler.add_supersede("a", "b");
    handler.add_removal("b", LabelPattern::Equals("c".into()));

    // "b" is gone before the removal pass, so "c" survives.
    let result = handler.compute_labels(&Issue::new("X-1", "Bug", "Open"));
    assert_eq!(result, labels(&["a", "c"]));
    assert_eq!(
        handler.conflicts(),
        vec![RuleConflict::TriggerSuperseded {
            trigger: "b".into(),
            dominant: "a".into(),
        }]
    );
}

#[test]
fn conflicts_empty_for_covered_overlaps() {
    let handler = handler();
    assert_eq!(handler.dominant_overlaps().len(), 2);
    assert!(handler.conflicts().is_empty());
}

#[test]
fn conflicts_report_orphaned_supersede() {
    let mut handler = CompositeLabelHandler::new();
    handler.add_supersede("type: bug", "type: regression");
    handler.add_removal("status: duplicate", LabelPattern::Equals("type: bug".into()));

    assert_eq!(
        handler.conflicts(),
        vec![RuleConflict::OrphanedSupersede {
            trigger: "status: duplicate".into(),
            dominant: "type: bug".into(),
            dominated: "type: regression".into(),
        }]
    );
}

#[test]
fn conflicts_report_trigger_removed_by_other_rule() {
    let mut handler = CompositeLabelHandler::new();
    handler.add_removal("status: invalid", LabelPattern::StartsWith("status: ".into()));
    handler.add_removal("status: declined", LabelPattern::StartsWith("type: ".into()));

    assert_eq!(
        handler.conflicts(),
        vec![RuleConflict::TriggerRemoved {
            trigger: "status: declined".into(),
            by: "status: invalid".into(),
        }]
    );
}

#[test]
fn conflict_display_names_labels() {
    let conflict = RuleConflict::TriggerSuperseded {
        trigger: "b".into(),
        dominant: "a".into(),
    };
    assert_eq!(
        conflict.to_string(),
        "removal trigger 'b' is superseded by 'a'"
    );
}

#[test]
fn composite_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompositeLabelHandler>();
}
