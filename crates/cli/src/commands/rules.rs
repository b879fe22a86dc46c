// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use ferry_core::RuleSet;

use crate::cli::RulesArgs;
use crate::config::{render_rules, RuleFormat};
use crate::error::Result;

use super::load_rules;

pub fn run(rules: &RulesArgs, output: RuleFormat) -> Result<()> {
    let rules = load_rules(rules)?;
    run_impl(&rules, output, &mut io::stdout().lock())
}

pub(crate) fn run_impl<W: Write>(rules: &RuleSet, output: RuleFormat, out: &mut W) -> Result<()> {
    let rendered = render_rules(rules, output)?;
    write!(out, "{}", rendered)?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
