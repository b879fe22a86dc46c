// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read issues or rule files.

use clap::Args;
use std::path::PathBuf;

/// Source issue input.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Issues as JSON lines (use '-' for stdin)
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,
}

/// Rule file selection.
#[derive(Args, Clone, Debug, Default)]
pub struct RulesArgs {
    /// Rule file (.toml or .json) [default: ./ferry.toml, ./ferry.json or built-in rules]
    #[arg(long, short = 'r', value_name = "PATH")]
    pub rules: Option<PathBuf>,
}

/// Issue selection for reports.
#[derive(Args, Clone, Debug, Default)]
pub struct ReportFilterArgs {
    /// Only issues with at least one comment
    #[arg(long, conflicts_with = "uncommented")]
    pub commented: bool,

    /// Only issues without comments
    #[arg(long)]
    pub uncommented: bool,

    /// Only issues commented on by USER (repeat for AND)
    #[arg(long, value_name = "USER")]
    pub commented_by: Vec<String>,

    /// Only issues a committer commented on
    #[arg(long, conflicts_with = "no_committer_comment")]
    pub committer_commented: bool,

    /// Only issues no committer commented on
    #[arg(long)]
    pub no_committer_comment: bool,

    /// Only issues reported by a committer
    #[arg(long, conflicts_with = "community_reported")]
    pub committer_reported: bool,

    /// Only issues not reported by a committer
    #[arg(long)]
    pub community_reported: bool,

    /// Only issues whose last comment is from a committer
    #[arg(long)]
    pub last_comment_by_committer: bool,

    /// Only issues whose last comment is older than WEEKS weeks
    #[arg(long, value_name = "WEEKS")]
    pub quiet_for_weeks: Option<u32>,

    /// Only issues created more than YEARS years ago
    #[arg(long, value_name = "YEARS", conflicts_with = "newer_than_years")]
    pub older_than_years: Option<u32>,

    /// Only issues created within the last YEARS years
    #[arg(long, value_name = "YEARS")]
    pub newer_than_years: Option<u32>,
}
