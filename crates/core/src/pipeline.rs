// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The per-issue migration pipeline.
//!
//! A [`Migration`] is built once from a rule set and is read-only afterwards.
//! Each call to [`Migration::migrate`] owns one issue and runs, in order:
//! `before_conversion`, label computation, request construction and
//! `before_import`.

use std::fmt;

use crate::composite::CompositeLabelHandler;
use crate::error::{Error, Result};
use crate::import::ImportRequest;
use crate::issue::{Issue, Version};
use crate::label::LabelSet;
use crate::milestone::{collect_milestones, Milestone, MilestoneFilter, SkipListFilter};
use crate::processor::{CompositeIssueProcessor, Disposition, IssueProcessor};

/// Result of migrating one issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Imported(ImportRequest),
    Skipped { key: String, reason: String },
}

impl Outcome {
    pub fn key(&self) -> &str {
        match self {
            Outcome::Imported(request) => &request.source_key,
            Outcome::Skipped { key, .. } => key,
        }
    }

    pub fn request(&self) -> Option<&ImportRequest> {
        match self {
            Outcome::Imported(request) => Some(request),
            Outcome::Skipped { .. } => None,
        }
    }
}

/// Label derivation, issue processing and milestone selection for one
/// migration run.
pub struct Migration {
    labels: CompositeLabelHandler,
    processor: CompositeIssueProcessor,
    milestones: Box<dyn MilestoneFilter>,
}

impl Migration {
    pub fn new(labels: CompositeLabelHandler, processor: CompositeIssueProcessor) -> Self {
        Migration {
            labels,
            processor,
            milestones: Box::new(SkipListFilter::default()),
        }
    }

    /// Replaces the milestone filter (builder pattern).
    pub fn with_milestone_filter<F>(mut self, filter: F) -> Self
    where
        F: MilestoneFilter + 'static,
    {
        self.milestones = Box::new(filter);
        self
    }

    pub fn label_handler(&self) -> &CompositeLabelHandler {
        &self.labels
    }

    pub fn processor(&self) -> &CompositeIssueProcessor {
        &self.processor
    }

    /// Resolved labels for `issue` without running any processor.
    pub fn compute_labels(&self, issue: &Issue) -> LabelSet {
        self.labels.compute_labels(issue)
    }

    pub fn accepts_milestone(&self, version: &Version) -> bool {
        self.milestones.accepts(version)
    }

    /// Milestones to create for `issues`.
    pub fn milestones<'a, I>(&self, issues: I) -> Vec<Milestone>
    where
        I: IntoIterator<Item = &'a Issue>,
    {
        collect_milestones(issues, self.milestones.as_ref())
    }

    /// Converts one issue into an import request.
    ///
    /// An issue without a key is rejected; the failure concerns that issue
    /// only and the caller may carry on with the next one.
    pub fn migrate(&self, mut issue: Issue) -> Result<Outcome> {
        if issue.key.trim().is_empty() {
            return Err(Error::invalid_argument("issue key must not be empty"));
        }

        if let Disposition::Skip { reason } = self.processor.before_conversion(&mut issue) {
            return Ok(Outcome::Skipped {
                key: issue.key,
                reason,
            });
        }

        let labels = self.labels.compute_labels(&issue);
        let mut request = ImportRequest::from_issue(&issue, labels);
        // Skipped milestones are never created, so the request must not point at one.
        if issue
            .fix_version
            .as_ref()
            .is_some_and(|v| !self.milestones.accepts(v))
        {
            request.issue.milestone = None;
        }
        self.processor.before_import(&issue, &mut request);

        Ok(Outcome::Imported(request))
    }
}

impl fmt::Debug for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Migration")
            .field("labels", &self.labels)
            .field("processor", &self.processor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
