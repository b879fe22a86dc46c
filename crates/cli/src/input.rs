// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading source issues.
//!
//! Issues arrive as JSON lines, one [`Issue`] per line, from a file or from
//! stdin when the path is `-`. Blank lines are ignored.

use ferry_core::Issue;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::{Error, Result};

/// Opens `path` for reading, or stdin for `-`.
pub fn open(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path)
        .map_err(|e| Error::Io(io::Error::other(format!("cannot open {}: {}", path, e))))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Parses every issue from `reader`.
pub fn read_issues<R: BufRead>(reader: R) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let issue: Issue = serde_json::from_str(line).map_err(|e| Error::ParseLineError {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        issues.push(issue);
    }
    Ok(issues)
}

pub fn load_issues(path: &str) -> Result<Vec<Issue>> {
    let issues = read_issues(open(path)?)?;
    tracing::debug!("read {} issues from {}", issues.len(), path);
    Ok(issues)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
