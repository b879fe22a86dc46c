// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue processors: hooks around conversion and import.
//!
//! A processor may adjust the source issue before any field is mapped
//! (`before_conversion`) and the constructed request after labels are
//! resolved (`before_import`). The second hook only borrows the source issue,
//! so it can read but never change it.

use std::fmt;

use crate::import::ImportRequest;
use crate::issue::Issue;
use crate::label::LabelFactory;

/// Outcome of the `before_conversion` hook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Disposition {
    #[default]
    Keep,
    /// Drop the issue from the migration; the driver decides what to report.
    Skip { reason: String },
}

impl Disposition {
    pub fn skip(reason: impl Into<String>) -> Self {
        Disposition::Skip {
            reason: reason.into(),
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Disposition::Skip { .. })
    }
}

/// Hook-based adjustments to one issue and its import request.
pub trait IssueProcessor: Send + Sync {
    fn before_conversion(&self, _issue: &mut Issue) -> Disposition {
        Disposition::Keep
    }

    fn before_import(&self, _issue: &Issue, _request: &mut ImportRequest) {}
}

/// Runs processors in order through both hooks.
#[derive(Default)]
pub struct CompositeIssueProcessor {
    processors: Vec<Box<dyn IssueProcessor>>,
}

impl CompositeIssueProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<P>(&mut self, processor: P)
    where
        P: IssueProcessor + 'static,
    {
        self.processors.push(Box::new(processor));
    }

    /// Builder form of [`CompositeIssueProcessor::add`].
    pub fn with<P>(mut self, processor: P) -> Self
    where
        P: IssueProcessor + 'static,
    {
        self.add(processor);
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl IssueProcessor for CompositeIssueProcessor {
    /// Stops at the first processor that skips the issue.
    fn before_conversion(&self, issue: &mut Issue) -> Disposition {
        for processor in &self.processors {
            let disposition = processor.before_conversion(issue);
            if disposition.is_skip() {
                return disposition;
            }
        }
        Disposition::Keep
    }

    fn before_import(&self, issue: &Issue, request: &mut ImportRequest) {
        for processor in &self.processors {
            processor.before_import(issue, request);
        }
    }
}

impl fmt::Debug for CompositeIssueProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeIssueProcessor")
            .field("processors", &self.processors.len())
            .finish()
    }
}

/// Clears the assignee of issues nobody is actually working on.
///
/// The assignee is dropped when the source fix version is a backlog bucket
/// or when the resolved labels say the issue is awaiting triage or open for
/// contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeDroppingProcessor {
    backlog_marker: String,
    labels: Vec<String>,
}

impl AssigneeDroppingProcessor {
    pub fn new(backlog_marker: impl Into<String>, labels: Vec<String>) -> Self {
        AssigneeDroppingProcessor {
            backlog_marker: backlog_marker.into(),
            labels,
        }
    }

    fn in_backlog(&self, issue: &Issue) -> bool {
        issue
            .fix_version
            .as_ref()
            .is_some_and(|v| v.name.contains(self.backlog_marker.as_str()))
    }
}

impl Default for AssigneeDroppingProcessor {
    fn default() -> Self {
        AssigneeDroppingProcessor::new("Backlog", default_unowned_labels())
    }
}

/// Labels that mark an issue as nobody's work yet.
pub fn default_unowned_labels() -> Vec<String> {
    ["waiting-for-triage", "ideal-for-contribution"]
        .iter()
        .map(|short| LabelFactory::Status.create(short).into_name())
        .collect()
}

impl IssueProcessor for AssigneeDroppingProcessor {
    fn before_import(&self, issue: &Issue, request: &mut ImportRequest) {
        let unowned = self.in_backlog(issue) || self.labels.iter().any(|l| request.has_label(l));
        if unowned && request.issue.assignee.take().is_some() {
            tracing::debug!("{}: assignee dropped", issue.key);
        }
    }
}

/// Shortens the description of one issue that is too large to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionTruncatingProcessor {
    key: String,
    max_chars: usize,
}

impl DescriptionTruncatingProcessor {
    pub fn new(key: impl Into<String>, max_chars: usize) -> Self {
        DescriptionTruncatingProcessor {
            key: key.into(),
            max_chars,
        }
    }
}

impl IssueProcessor for DescriptionTruncatingProcessor {
    fn before_conversion(&self, issue: &mut Issue) -> Disposition {
        if issue.key != self.key {
            return Disposition::Keep;
        }
        if let Some(description) = issue.description.as_mut() {
            if let Some((cut, _)) = description.char_indices().nth(self.max_chars) {
                description.truncate(cut);
                description.push_str("...");
                tracing::debug!("{}: description truncated", issue.key);
            }
        }
        Disposition::Keep
    }
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;
