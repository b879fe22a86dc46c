// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source tracker issue records.
//!
//! An [`Issue`] is the record being migrated. It is owned by the pipeline for
//! the duration of one issue's processing and is only mutated by
//! `before_conversion` processors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named release in the source tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub name: String,
}

impl Version {
    pub fn new(name: impl Into<String>) -> Self {
        Version { name: name.into() }
    }
}

impl From<&str> for Version {
    fn from(name: &str) -> Self {
        Version::new(name)
    }
}

/// A comment on a source issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Account key of the author.
    pub author: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn new(author: impl Into<String>, created: DateTime<Utc>) -> Self {
        Comment {
            author: author.into(),
            body: String::new(),
            created: Some(created),
        }
    }
}

/// A source tracker issue.
///
/// When deserialized, the raw `fix_versions` list of the source tracker is
/// accepted in place of the split `fix_version` / `backport_versions` form
/// (see [`Issue::assign_versions`]). A record carrying both forms is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IssueRecord")]
pub struct Issue {
    /// Tracker key, e.g. `SPR-7640`.
    pub key: String,
    /// Source issue type name, e.g. `Bug`.
    pub issue_type: String,
    /// Source workflow status name, e.g. `In Progress`.
    pub status: String,
    /// Resolution name; `None` while unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_version: Option<Version>,
    /// Further versions the fix was back-ported to, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub backport_versions: Vec<Version>,
    /// Free-form source labels, e.g. `Regression`.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    pub votes: u32,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl Issue {
    /// Creates an unresolved issue with no versions, tags, votes or comments.
    pub fn new(
        key: impl Into<String>,
        issue_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Issue {
            key: key.into(),
            issue_type: issue_type.into(),
            status: status.into(),
            resolution: None,
            fix_version: None,
            backport_versions: Vec::new(),
            tags: BTreeSet::new(),
            votes: 0,
            summary: String::new(),
            description: None,
            assignee: None,
            reporter: None,
            created: None,
            comments: Vec::new(),
        }
    }

    /// Sets the resolution (builder pattern).
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    /// Sets the fix version (builder pattern).
    pub fn with_fix_version(mut self, name: impl Into<String>) -> Self {
        self.fix_version = Some(Version::new(name));
        self
    }

    /// Appends a backport version (builder pattern).
    pub fn with_backport(mut self, name: impl Into<String>) -> Self {
        self.backport_versions.push(Version::new(name));
        self
    }

    /// Adds a source tag (builder pattern).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Sets the vote count (builder pattern).
    pub fn with_votes(mut self, votes: u32) -> Self {
        self.votes = votes;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = Some(reporter.into());
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Splits the source tracker's fix-version list.
    ///
    /// The first listed version becomes the fix version; the rest become
    /// backport versions in source order. An empty list clears both.
    pub fn assign_versions(&mut self, versions: Vec<Version>) {
        let mut versions = versions.into_iter();
        self.fix_version = versions.next();
        self.backport_versions = versions.collect();
    }

    /// Names of the fix version and every backport version, fix version first.
    pub fn version_names(&self) -> impl Iterator<Item = &str> {
        self.fix_version
            .iter()
            .chain(self.backport_versions.iter())
            .map(|v| v.name.as_str())
    }

    /// The most recent comment, if any.
    pub fn last_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }
}

// Wire form accepted on input: either split versions or the raw list.
#[derive(Deserialize)]
struct IssueRecord {
    key: String,
    issue_type: String,
    status: String,
    #[serde(default)]
    resolution: Option<String>,
    #[serde(default)]
    fix_version: Option<Version>,
    #[serde(default)]
    backport_versions: Vec<Version>,
    #[serde(default)]
    fix_versions: Vec<Version>,
    #[serde(default)]
    tags: BTreeSet<String>,
    #[serde(default)]
    votes: u32,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    reporter: Option<String>,
    #[serde(default)]
    created: Option<DateTime<Utc>>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl TryFrom<IssueRecord> for Issue {
    type Error = String;

    fn try_from(record: IssueRecord) -> std::result::Result<Self, String> {
        let split = record.fix_version.is_some() || !record.backport_versions.is_empty();
        if split && !record.fix_versions.is_empty() {
            return Err(format!(
                "issue {}: give either fix_versions or fix_version/backport_versions, not both",
                record.key
            ));
        }

        let mut issue = Issue {
            key: record.key,
            issue_type: record.issue_type,
            status: record.status,
            resolution: record.resolution,
            fix_version: record.fix_version,
            backport_versions: record.backport_versions,
            tags: record.tags,
            votes: record.votes,
            summary: record.summary,
            description: record.description,
            assignee: record.assignee,
            reporter: record.reporter,
            created: record.created,
            comments: record.comments,
        };
        if !record.fix_versions.is_empty() {
            issue.assign_versions(record.fix_versions);
        }
        Ok(issue)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
