// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ferry_core::{Issue, Migration, Outcome};

use crate::cli::RulesArgs;
use crate::error::{Error, Result};
use crate::input::load_issues;

use super::build_migration;

/// Per-run migration counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationSummary {
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "imported: {}, skipped: {}, failed: {}",
            self.imported, self.skipped, self.failed
        )
    }
}

pub fn run(input: &str, rules: &RulesArgs, output: Option<&Path>, dry_run: bool) -> Result<()> {
    let migration = build_migration(rules)?;
    let issues = load_issues(input)?;

    let summary = match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::Io(io::Error::other(format!(
                    "cannot create {}: {}",
                    path.display(),
                    e
                )))
            })?;
            let mut writer = BufWriter::new(file);
            let summary = run_impl(&migration, issues, &mut writer, false)?;
            writer.flush()?;
            summary
        }
        None => run_impl(&migration, issues, &mut io::stdout().lock(), dry_run)?,
    };

    eprintln!("{}", summary);
    if summary.failed > 0 {
        return Err(Error::PartialFailure {
            succeeded: summary.imported + summary.skipped,
            failed: summary.failed,
        });
    }
    Ok(())
}

/// Migrates every issue, writing one import request per line, or a readable
/// plan when `dry_run` is set.
///
/// An issue that fails is logged and counted; the others still migrate.
pub(crate) fn run_impl<W: Write>(
    migration: &Migration,
    issues: Vec<Issue>,
    out: &mut W,
    dry_run: bool,
) -> Result<MigrationSummary> {
    let mut summary = MigrationSummary::default();

    for (index, issue) in issues.into_iter().enumerate() {
        match migration.migrate(issue) {
            Ok(Outcome::Imported(request)) => {
                if dry_run {
                    let labels: Vec<&str> = request.labels().iter().map(String::as_str).collect();
                    writeln!(
                        out,
                        "import {}: {} [{}]",
                        request.source_key,
                        request.issue.title,
                        labels.join(", ")
                    )?;
                } else {
                    writeln!(out, "{}", serde_json::to_string(&request)?)?;
                }
                tracing::info!(
                    "{}: imported with {} labels",
                    request.source_key,
                    request.labels().len()
                );
                summary.imported += 1;
            }
            Ok(Outcome::Skipped { key, reason }) => {
                if dry_run {
                    writeln!(out, "skip {}: {}", key, reason)?;
                }
                tracing::info!("{}: skipped: {}", key, reason);
                summary.skipped += 1;
            }
            Err(e) => {
                tracing::warn!("issue #{}: {}", index + 1, e);
                eprintln!("warning: issue #{}: {}", index + 1, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
