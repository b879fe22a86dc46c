// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ferry-core operations.

use thiserror::Error;

/// All possible errors that can occur in ferry-core operations.
///
/// Label derivation itself never fails: unmapped values contribute no label
/// and label collisions are settled by rule precedence. These errors cover
/// caller contract violations and rule set construction.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid field kind: '{0}'\n  hint: valid kinds are: type, resolution, status, version, tag")]
    InvalidFieldKind(String),

    #[error("invalid label category: '{0}'\n  hint: valid categories are: status, type, has")]
    InvalidCategory(String),

    #[error("invalid label factory: '{0}'\n  hint: valid factories are: plain, status, type, has")]
    InvalidFactory(String),

    #[error("invalid label pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// A specialized Result type for ferry-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
