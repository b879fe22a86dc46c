// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::config::RuleFormat;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use ferry_core::ReportOrder;
use std::path::PathBuf;

pub use args::{InputArgs, ReportFilterArgs, RulesArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ferry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Migrate issues between trackers with rule-driven labels")]
#[command(
    long_about = "Migrate issues between trackers with rule-driven labels.\n\n\
    Source issues are mapped to categorized labels, reconciled by supersede and removal \
    rules, and written out as import requests for the target tracker."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Append diagnostic logs to <path> instead of stderr
    #[arg(long, global = true, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert issues into import requests
    #[command(after_help = colors::examples("\
Examples:
  ferry migrate issues.jsonl                  Write requests to stdout
  ferry migrate issues.jsonl -O out.jsonl     Write requests to a file
  ferry migrate issues.jsonl --dry-run        Show what would be imported
  cat issues.jsonl | ferry migrate -r my.toml  Use a custom rule file"))]
    Migrate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        rules: RulesArgs,

        /// Write import requests (JSON lines) to PATH instead of stdout
        #[arg(long = "output", short = 'O', value_name = "PATH")]
        output: Option<PathBuf>,

        /// Show what would be imported without writing requests
        #[arg(long, conflicts_with = "output")]
        dry_run: bool,
    },

    /// Show the labels each issue resolves to
    #[command(after_help = colors::examples("\
Examples:
  ferry labels issues.jsonl           One line per issue
  ferry labels issues.jsonl -o json   JSON lines with key and labels"))]
    Labels {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        rules: RulesArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List milestones to create for the given issues
    Milestones {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        rules: RulesArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Check the rule set for conflicts
    ///
    /// Label conflicts are settled in one supersede pass followed by one
    /// removal pass. This reports rule combinations for which that single pass
    /// would leave labels that further passes would remove.
    Check {
        #[command(flatten)]
        rules: RulesArgs,
    },

    /// Print the effective rule set
    #[command(after_help = colors::examples("\
Examples:
  ferry rules > ferry.toml           Start a rule file from the built-in rules
  ferry rules -o json                Print the rules as JSON"))]
    Rules {
        #[command(flatten)]
        rules: RulesArgs,

        /// Output format (toml, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "toml")]
        output: RuleFormat,
    },

    /// Report on issues awaiting triage
    #[command(after_help = colors::examples("\
Examples:
  ferry report issues.jsonl --committer alice,bob --uncommented
  ferry report issues.jsonl --committer alice --order votes --top 50
  ferry report issues.jsonl --committer alice --community-reported --last-comment-by-committer --quiet-for-weeks 2"))]
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        rules: RulesArgs,

        /// Committer account keys (comma-separated or repeated)
        #[arg(long, value_delimiter = ',', required = true, value_name = "NAME")]
        committer: Vec<String>,

        #[command(flatten)]
        filters: ReportFilterArgs,

        /// Sort column, descending (created, votes)
        #[arg(long, default_value = "created")]
        order: ReportOrder,

        /// Keep only the first N matching issues
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Include issues that are not awaiting triage
        #[arg(long)]
        all: bool,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  ferry completion bash > ~/.local/share/bash-completion/completions/ferry
  ferry completion zsh > ~/.zfunc/_ferry
  ferry completion fish > ~/.config/fish/completions/ferry.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
