// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Milestone selection.
//!
//! Some source versions are workflow buckets rather than releases and must
//! not become milestones in the target tracker.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::issue::{Issue, Version};

/// Version names that are never turned into milestones by default.
pub const DEFAULT_SKIPPED_VERSIONS: &[&str] = &[
    "Contributions Welcome",
    "Pending Closure",
    "Waiting for Triage",
];

/// Decides whether a source version becomes a milestone.
pub trait MilestoneFilter: Send + Sync {
    fn accepts(&self, version: &Version) -> bool;
}

/// Rejects versions whose name is on a skip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipListFilter {
    skipped: BTreeSet<String>,
}

impl SkipListFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SkipListFilter {
            skipped: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.skipped.iter().map(String::as_str)
    }
}

impl Default for SkipListFilter {
    fn default() -> Self {
        SkipListFilter::new(DEFAULT_SKIPPED_VERSIONS.iter().copied())
    }
}

impl MilestoneFilter for SkipListFilter {
    fn accepts(&self, version: &Version) -> bool {
        !self.skipped.contains(&version.name)
    }
}

/// Lifecycle state of a target milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    #[default]
    Open,
    Closed,
}

/// A milestone to create in the target tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub state: MilestoneState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
}

impl Milestone {
    pub fn open(title: impl Into<String>) -> Self {
        Milestone {
            title: title.into(),
            state: MilestoneState::Open,
            description: None,
            due_on: None,
        }
    }
}

/// Distinct accepted fix and backport versions across `issues`, in the order
/// they are first seen.
pub fn collect_milestones<'a, I>(issues: I, filter: &dyn MilestoneFilter) -> Vec<Milestone>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut seen = HashSet::new();
    let mut milestones = Vec::new();
    for issue in issues {
        let versions = issue.fix_version.iter().chain(issue.backport_versions.iter());
        for version in versions {
            if !filter.accepts(version) {
                continue;
            }
            if seen.insert(version.name.clone()) {
                milestones.push(Milestone::open(version.name.clone()));
            }
        }
    }
    milestones
}

#[cfg(test)]
#[path = "milestone_tests.rs"]
mod tests;
