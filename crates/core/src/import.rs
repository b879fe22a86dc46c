// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The import request sent to the target tracker.
//!
//! Requests are built in memory from a converted issue and its resolved
//! labels; submitting them is the caller's business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issue::{Comment, Issue};
use crate::label::LabelSet;

/// Issue fields of an import request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportIssue {
    pub title: String,
    pub body: String,
    pub labels: LabelSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Milestone title, taken from the fix version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    pub closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment carried over with the import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportComment {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Comment> for ImportComment {
    fn from(comment: &Comment) -> Self {
        ImportComment {
            body: comment.body.clone(),
            created_at: comment.created,
        }
    }
}

/// A complete import payload for one source issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Key of the source issue, for correlating results.
    pub source_key: String,
    pub issue: ImportIssue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ImportComment>,
}

impl ImportRequest {
    /// Builds a request from a converted issue and its resolved label set.
    ///
    /// An issue with a resolution is imported closed.
    pub fn from_issue(issue: &Issue, labels: LabelSet) -> Self {
        ImportRequest {
            source_key: issue.key.clone(),
            issue: ImportIssue {
                title: issue.summary.clone(),
                body: issue.description.clone().unwrap_or_default(),
                labels,
                assignee: issue.assignee.clone(),
                milestone: issue.fix_version.as_ref().map(|v| v.name.clone()),
                closed: issue.resolution.is_some(),
                created_at: issue.created,
            },
            comments: issue.comments.iter().map(ImportComment::from).collect(),
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.issue.labels
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.issue.labels.contains(label)
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
