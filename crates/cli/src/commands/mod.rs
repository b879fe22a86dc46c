// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod labels;
pub mod migrate;
pub mod milestones;
pub mod report;
pub mod rules;

use ferry_core::{Migration, RuleSet};

use crate::cli::RulesArgs;
use crate::config;
use crate::error::Result;

/// Loads the effective rule set, looking for a rule file in the working
/// directory when none is given.
pub fn load_rules(args: &RulesArgs) -> Result<RuleSet> {
    let cwd = std::env::current_dir()?;
    config::load_rules(args.rules.as_deref(), &cwd)
}

/// Builds the migration pipeline from the effective rule set.
pub fn build_migration(args: &RulesArgs) -> Result<Migration> {
    Ok(load_rules(args)?.build()?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
