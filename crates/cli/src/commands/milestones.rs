// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ferry_core::{Issue, Migration};

use crate::cli::{OutputFormat, RulesArgs};
use crate::error::Result;
use crate::input::load_issues;

use super::build_migration;

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
    let milestones = migration.milestones(issues);
    match output {
        OutputFormat::Text => {
            for milestone in &milestones {
                writeln!(out, "{}", milestone.title)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&milestones)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "milestones_tests.rs"]
mod tests;
