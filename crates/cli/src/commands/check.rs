// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ferry_core::RuleSet;

use crate::cli::RulesArgs;
use crate::error::{Error, Result};

use super::load_rules;

pub fn run(rules: &RulesArgs) -> Result<()> {
    let rules = load_rules(rules)?;
    run_impl(&rules, &mut io::stdout().lock())
}

/// Validates the rule set and lists rule conflicts.
pub(crate) fn run_impl<W: Write>(rules: &RuleSet, out: &mut W) -> Result<()> {
    let handler = rules.label_handler()?;
    rules.processor()?;

    let conflicts = handler.conflicts();
    for conflict in &conflicts {
        writeln!(out, "conflict: {}", conflict)?;
    }
    if !conflicts.is_empty() {
        return Err(Error::ConflictingRules(conflicts.len()));
    }

    writeln!(
        out,
        "ok: {} mappings, {} predicates, {} supersede rules, {} removal rules",
        rules.mappings.len(),
        rules.predicates.len(),
        handler.supersedes().len(),
        handler.removals().len()
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
