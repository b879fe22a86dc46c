// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Triage reports over source issues.
//!
//! Reports select issues with an [`IssueFilter`], evaluated against an
//! explicit [`ReportContext`], and render the selection as a tracker query
//! so the same issues can be opened in the source tracker.

use chrono::{DateTime, Duration, Months, Utc};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Who counts as a committer, and the instant relative dates refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    pub committers: BTreeSet<String>,
    pub now: DateTime<Utc>,
}

impl ReportContext {
    pub fn new<I, S>(committers: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReportContext {
            committers: committers.into_iter().map(Into::into).collect(),
            now,
        }
    }

    pub fn is_committer(&self, user: &str) -> bool {
        self.committers.contains(user)
    }

    /// Clamps to the earliest representable time instead of overflowing.
    pub fn weeks_ago(&self, weeks: i64) -> DateTime<Utc> {
        Duration::try_weeks(weeks)
            .and_then(|delta| self.now.checked_sub_signed(delta))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn years_ago(&self, years: u32) -> DateTime<Utc> {
        self.now
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Predicate over source issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueFilter {
    All,
    Commented,
    CommentedBy(String),
    CommitterCommented,
    CommitterReported,
    LastCommentedByCommitter,
    LastCommentedBefore(DateTime<Utc>),
    CreatedBefore(DateTime<Utc>),
    CreatedAfter(DateTime<Utc>),
    Not(Box<IssueFilter>),
    And(Vec<IssueFilter>),
}

impl IssueFilter {
    pub fn commented_by(user: impl Into<String>) -> Self {
        IssueFilter::CommentedBy(user.into())
    }

    pub fn and(self, other: IssueFilter) -> Self {
        match self {
            IssueFilter::All => other,
            IssueFilter::And(mut filters) => {
                filters.push(other);
                IssueFilter::And(filters)
            }
            first => IssueFilter::And(vec![first, other]),
        }
    }

    pub fn matches(&self, issue: &Issue, ctx: &ReportContext) -> bool {
        match self {
            IssueFilter::All => true,
            IssueFilter::Commented => !issue.comments.is_empty(),
            IssueFilter::CommentedBy(user) => issue.comments.iter().any(|c| c.author == *user),
            IssueFilter::CommitterCommented => {
                issue.comments.iter().any(|c| ctx.is_committer(&c.author))
            }
            IssueFilter::CommitterReported => issue
                .reporter
                .as_deref()
                .is_some_and(|r| ctx.is_committer(r)),
            IssueFilter::LastCommentedByCommitter => issue
                .last_comment()
                .is_some_and(|c| ctx.is_committer(&c.author)),
            IssueFilter::LastCommentedBefore(t) => issue
                .last_comment()
                .and_then(|c| c.created)
                .is_some_and(|created| created < *t),
            IssueFilter::CreatedBefore(t) => issue.created.is_some_and(|c| c < *t),
            IssueFilter::CreatedAfter(t) => issue.created.is_some_and(|c| c > *t),
            IssueFilter::Not(inner) => !inner.matches(issue, ctx),
            IssueFilter::And(filters) => filters.iter().all(|f| f.matches(issue, ctx)),
        }
    }
}

impl Not for IssueFilter {
    type Output = IssueFilter;

    fn not(self) -> IssueFilter {
        match self {
            IssueFilter::Not(inner) => *inner,
            other => IssueFilter::Not(Box::new(other)),
        }
    }
}

/// Admits at most `limit` issues.
///
/// Holds a running count, so each report run needs its own instance.
#[derive(Debug)]
pub struct Top {
    limit: usize,
    admitted: usize,
}

impl Top {
    pub fn new(limit: usize) -> Self {
        Top { limit, admitted: 0 }
    }

    pub fn admit(&mut self) -> bool {
        if self.admitted < self.limit {
            self.admitted += 1;
            true
        } else {
            false
        }
    }
}

/// Column a report is sorted by, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportOrder {
    #[default]
    Created,
    Votes,
}

impl ReportOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportOrder::Created => "created",
            ReportOrder::Votes => "votes",
        }
    }
}

impl fmt::Display for ReportOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "created" => Ok(ReportOrder::Created),
            "votes" => Ok(ReportOrder::Votes),
            _ => Err(Error::invalid_argument(format!(
                "unknown report order '{}' (expected created or votes)",
                s
            ))),
        }
    }
}

/// Issues selected by one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub matched: usize,
    pub total: usize,
    pub keys: Vec<String>,
    pub order: ReportOrder,
}

impl Report {
    /// `"12 out of 40"`
    pub fn summary(&self) -> String {
        format!("{} out of {}", self.matched, self.total)
    }

    /// Tracker query selecting the matched issues in report order.
    pub fn query(&self) -> String {
        format!(
            "key in ({}) ORDER BY {} DESC",
            self.keys.join(","),
            self.order
        )
    }
}

/// Sorts `issues` by `order` (descending), keeps those matching `filter`
/// and, with a `limit`, only the first `limit` of those.
pub fn run_report<'a, I>(
    issues: I,
    filter: &IssueFilter,
    ctx: &ReportContext,
    order: ReportOrder,
    limit: Option<usize>,
) -> Report
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut issues: Vec<&Issue> = issues.into_iter().collect();
    match order {
        ReportOrder::Created => issues.sort_by_key(|i| Reverse(i.created)),
        ReportOrder::Votes => issues.sort_by_key(|i| Reverse(i.votes)),
    }

    let mut top = limit.map(Top::new);
    let keys: Vec<String> = issues
        .iter()
        .filter(|issue| filter.matches(issue, ctx))
        .filter(|_| match top.as_mut() {
            Some(top) => top.admit(),
            None => true,
        })
        .map(|issue| issue.key.clone())
        .collect();

    Report {
        matched: keys.len(),
        total: issues.len(),
        keys,
        order,
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
