// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ferry_core::{Issue, LabelSet, Migration};
use serde::Serialize;

use crate::cli::{OutputFormat, RulesArgs};
use crate::error::Result;
use crate::input::load_issues;

use super::build_migration;

#[derive(Serialize)]
struct IssueLabels<'a> {
    key: &'a str,
    labels: &'a LabelSet,
}

pub fn run(input: &str, rules: &RulesArgs, output: OutputFormat) -> Result<()> {
    let migration = build_migration(rules)?;
    let issues = load_issues(input)?;
    run_impl(&migration, &issues, output, &mut io::stdout().lock())
}

pub(crate) fn run_impl<W: Write>(
    migration: &Migration,
    issues: &[Issue],
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for issue in issues {
        let labels = migration.compute_labels(issue);
        match output {
            OutputFormat::Text => {
                if labels.is_empty() {
                    writeln!(out, "{}: (none)", issue.key)?;
                } else {
                    let names: Vec<&str> = labels.iter().map(String::as_str).collect();
                    writeln!(out, "{}: {}", issue.key, names.join(", "))?;
                }
            }
            OutputFormat::Json => {
                let entry = IssueLabels {
                    key: &issue.key,
                    labels: &labels,
                };
                writeln!(out, "{}", serde_json::to_string(&entry)?)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
