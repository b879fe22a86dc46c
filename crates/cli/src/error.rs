// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ferry CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] ferry_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("unsupported rule file '{path}'\n  hint: rule files must end in .toml or .json")]
    UnsupportedRuleFile { path: String },

    #[error("line {line}: {reason}")]
    ParseLineError { line: usize, reason: String },

    #[error("rule set has {0} conflict(s)\n  hint: run 'ferry check' to list them")]
    ConflictingRules(usize),

    #[error("some issues failed to migrate: {succeeded} succeeded, {failed} failed")]
    PartialFailure { succeeded: usize, failed: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ferry CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
