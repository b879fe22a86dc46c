// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label handlers: units of logic contributing candidate labels for an issue.

use serde::{Deserialize, Serialize};

use crate::issue::Issue;
use crate::label::{Label, LabelSet};

/// Computes zero or more candidate labels for one issue.
///
/// Implementations must be pure: the same issue always yields the same set.
/// Handlers are shared read-only across issues once configured.
pub trait LabelHandler: Send + Sync {
    fn compute_labels(&self, issue: &Issue) -> LabelSet;
}

type Predicate = Box<dyn Fn(&Issue) -> bool + Send + Sync>;

/// Contributes a fixed label when a predicate over the issue holds.
///
/// Covers rules that cannot be written as a field-value lookup, such as
/// "no resolution and no fix version".
pub struct PredicateLabelHandler {
    label: Label,
    predicate: Predicate,
}

impl PredicateLabelHandler {
    pub fn new<F>(label: Label, predicate: F) -> Self
    where
        F: Fn(&Issue) -> bool + Send + Sync + 'static,
    {
        PredicateLabelHandler {
            label,
            predicate: Box::new(predicate),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl LabelHandler for PredicateLabelHandler {
    fn compute_labels(&self, issue: &Issue) -> LabelSet {
        let mut labels = LabelSet::new();
        if (self.predicate)(issue) {
            labels.insert(self.label.name().to_string());
        }
        labels
    }
}

impl std::fmt::Debug for PredicateLabelHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateLabelHandler")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Issue predicates that rule files can name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum IssuePredicate {
    /// No resolution and no fix version: nobody has looked at it yet.
    UnresolvedWithoutFixVersion,
    StatusIs { status: String },
    ResolutionIs { resolution: String },
    VotesAtLeast { votes: u32 },
    HasBackports,
    HasTag { tag: String },
    FixVersionContains { text: String },
}

impl IssuePredicate {
    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            IssuePredicate::UnresolvedWithoutFixVersion => {
                issue.resolution.is_none() && issue.fix_version.is_none()
            }
            IssuePredicate::StatusIs { status } => issue.status == *status,
            IssuePredicate::ResolutionIs { resolution } => {
                issue.resolution.as_deref() == Some(resolution.as_str())
            }
            IssuePredicate::VotesAtLeast { votes } => issue.votes >= *votes,
            IssuePredicate::HasBackports => !issue.backport_versions.is_empty(),
            IssuePredicate::HasTag { tag } => issue.tags.contains(tag),
            IssuePredicate::FixVersionContains { text } => issue
                .fix_version
                .as_ref()
                .is_some_and(|v| v.name.contains(text.as_str())),
        }
    }

    /// Wraps this predicate into a handler contributing `label`.
    pub fn into_handler(self, label: Label) -> PredicateLabelHandler {
        PredicateLabelHandler::new(label, move |issue| self.matches(issue))
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
