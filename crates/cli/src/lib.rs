// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ferryrs - command-line driver for rule-driven issue migration.
//!
//! This crate wraps [`ferry_core`] with rule file loading, JSON lines input
//! and the `ferry` commands.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - the command-line interface
//! - [`config`] - rule file discovery, parsing and rendering
//! - [`input`] - reading source issues as JSON lines
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! use ferryrs::config::load_rules;
//!
//! let rules = load_rules(Some(Path::new("ferry.toml")), Path::new("."))?;
//! let migration = rules.build()?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;
pub mod input;

pub use cli::{Cli, Command, InputArgs, OutputFormat, ReportFilterArgs, RulesArgs};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use commands::report::ReportOptions;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Migrate {
            input,
            rules,
            output,
            dry_run,
        } => commands::migrate::run(&input.input, &rules, output.as_deref(), dry_run),
        Command::Labels {
            input,
            rules,
            output,
        } => commands::labels::run(&input.input, &rules, output),
        Command::Milestones {
            input,
            rules,
            output,
        } => commands::milestones::run(&input.input, &rules, output),
        Command::Check { rules } => commands::check::run(&rules),
        Command::Rules { rules, output } => commands::rules::run(&rules, output),
        Command::Report {
            input,
            rules,
            committer,
            filters,
            order,
            top,
            all,
        } => commands::report::run(
            &input.input,
            &rules,
            committer,
            &filters,
            ReportOptions { order, top, all },
        ),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ferry", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
