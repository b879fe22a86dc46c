// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conflict resolution rules applied after all handlers have contributed.

use regex::Regex;
use std::fmt;

use crate::error::{Error, Result};
use crate::label::LabelSet;

/// If both labels are present, `dominated` is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupersedeRule {
    pub dominant: String,
    pub dominated: String,
}

impl SupersedeRule {
    pub fn new(dominant: impl Into<String>, dominated: impl Into<String>) -> Self {
        SupersedeRule {
            dominant: dominant.into(),
            dominated: dominated.into(),
        }
    }

    /// Applies the rule, returning true if a label was removed.
    pub fn apply(&self, labels: &mut LabelSet) -> bool {
        labels.contains(&self.dominant) && labels.remove(&self.dominated)
    }
}

/// Predicate over label names used by removal rules.
#[derive(Debug, Clone)]
pub enum LabelPattern {
    Equals(String),
    StartsWith(String),
    Matches(Regex),
}

impl LabelPattern {
    /// Compiles a regular expression pattern.
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(LabelPattern::Matches)
            .map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            LabelPattern::Equals(name) => label == name,
            LabelPattern::StartsWith(prefix) => label.starts_with(prefix.as_str()),
            LabelPattern::Matches(re) => re.is_match(label),
        }
    }
}

impl PartialEq for LabelPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LabelPattern::Equals(a), LabelPattern::Equals(b)) => a == b,
            (LabelPattern::StartsWith(a), LabelPattern::StartsWith(b)) => a == b,
            (LabelPattern::Matches(a), LabelPattern::Matches(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for LabelPattern {}

impl fmt::Display for LabelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPattern::Equals(name) => write!(f, "= '{}'", name),
            LabelPattern::StartsWith(prefix) => write!(f, "starts with '{}'", prefix),
            LabelPattern::Matches(re) => write!(f, "matches /{}/", re.as_str()),
        }
    }
}

/// Once `trigger` is present, every other label matching `pattern` is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRule {
    pub trigger: String,
    pub pattern: LabelPattern,
}

impl RemovalRule {
    pub fn new(trigger: impl Into<String>, pattern: LabelPattern) -> Self {
        RemovalRule {
            trigger: trigger.into(),
            pattern,
        }
    }

    /// Applies the rule, returning the removed labels.
    pub fn apply(&self, labels: &mut LabelSet) -> Vec<String> {
        if !labels.contains(&self.trigger) {
            return Vec::new();
        }
        let removed: Vec<String> = labels
            .iter()
            .filter(|label| **label != self.trigger && self.pattern.matches(label))
            .cloned()
            .collect();
        for label in &removed {
            labels.remove(label);
        }
        removed
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
