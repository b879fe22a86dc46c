// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use chrono::Utc;
use ferry_core::{
    run_report, Issue, IssueFilter, LabelFactory, Migration, ReportContext, ReportOrder,
};

use crate::cli::{ReportFilterArgs, RulesArgs};
use crate::error::Result;
use crate::input::load_issues;

use super::build_migration;

/// Report options other than the issue filter.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub order: ReportOrder,
    pub top: Option<usize>,
    /// Include issues the rules do not mark as awaiting triage.
    pub all: bool,
}

pub fn run(
    input: &str,
    rules: &RulesArgs,
    committers: Vec<String>,
    filters: &ReportFilterArgs,
    options: ReportOptions,
) -> Result<()> {
    let migration = build_migration(rules)?;
    let issues = load_issues(input)?;
    let ctx = ReportContext::new(committers, Utc::now());
    run_impl(
        &migration,
        &issues,
        &ctx,
        filters,
        options,
        &mut io::stdout().lock(),
    )
}

/// Translates command-line filters into one issue filter.
pub(crate) fn build_filter(args: &ReportFilterArgs, ctx: &ReportContext) -> IssueFilter {
    let mut filter = IssueFilter::All;
    if args.commented {
        filter = filter.and(IssueFilter::Commented);
    }
    if args.uncommented {
        filter = filter.and(!IssueFilter::Commented);
    }
    for user in &args.commented_by {
        filter = filter.and(IssueFilter::commented_by(user.as_str()));
    }
    if args.committer_commented {
        filter = filter.and(IssueFilter::CommitterCommented);
    }
    if args.no_committer_comment {
        filter = filter.and(!IssueFilter::CommitterCommented);
    }
    if args.committer_reported {
        filter = filter.and(IssueFilter::CommitterReported);
    }
    if args.community_reported {
        filter = filter.and(!IssueFilter::CommitterReported);
    }
    if args.last_comment_by_committer {
        filter = filter.and(IssueFilter::LastCommentedByCommitter);
    }
    if let Some(weeks) = args.quiet_for_weeks {
        filter = filter.and(IssueFilter::LastCommentedBefore(
            ctx.weeks_ago(i64::from(weeks)),
        ));
    }
    if let Some(years) = args.older_than_years {
        filter = filter.and(IssueFilter::CreatedBefore(ctx.years_ago(years)));
    }
    if let Some(years) = args.newer_than_years {
        filter = filter.and(IssueFilter::CreatedAfter(ctx.years_ago(years)));
    }
    filter
}

pub(crate) fn run_impl<W: Write>(
    migration: &Migration,
    issues: &[Issue],
    ctx: &ReportContext,
    filters: &ReportFilterArgs,
    options: ReportOptions,
    out: &mut W,
) -> Result<()> {
    let triage = LabelFactory::Status.create("waiting-for-triage").into_name();
    let candidates: Vec<&Issue> = issues
        .iter()
        .filter(|issue| options.all || migration.compute_labels(issue).contains(&triage))
        .collect();
    tracing::debug!(
        "reporting on {} of {} issues",
        candidates.len(),
        issues.len()
    );

    let filter = build_filter(filters, ctx);
    let report = run_report(candidates, &filter, ctx, options.order, options.top);

    writeln!(out, "{}", report.summary())?;
    writeln!(out, "{}", report.query())?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
