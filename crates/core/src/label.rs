// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target tracker labels and the factories that qualify them.
//!
//! A label is a fully qualified name such as `status: declined` together
//! with the category it was created for. Factories turn the short names used
//! in rule sets (`declined`) into qualified labels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};

/// The resolved labels of one issue, unique by fully qualified name.
pub type LabelSet = BTreeSet<String>;

/// Category tag carried by a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCategory {
    /// Workflow state (`status: waiting-for-triage`).
    Status,
    /// Kind of work (`type: bug`).
    Type,
    /// Presence of some attribute (`has: backports`).
    Has,
}

impl LabelCategory {
    /// Returns the prefix used in qualified label names.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelCategory::Status => "status",
            LabelCategory::Type => "type",
            LabelCategory::Has => "has",
        }
    }
}

impl fmt::Display for LabelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LabelCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "status" => Ok(LabelCategory::Status),
            "type" => Ok(LabelCategory::Type),
            "has" => Ok(LabelCategory::Has),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// An immutable label value.
///
/// Two labels are equal iff their qualified names match; the category is
/// descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<LabelCategory>,
}

impl Label {
    /// Creates an uncategorized label with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Label {
            name: name.into(),
            category: None,
        }
    }

    /// Fully qualified name, e.g. `status: declined`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<LabelCategory> {
        self.category
    }

    /// Consumes the label, returning its qualified name.
    pub fn into_name(self) -> String {
        self.name
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A pure function from a short name to a qualified [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFactory {
    /// Uses the short name as is, without a category.
    #[default]
    Plain,
    Status,
    Type,
    Has,
}

impl LabelFactory {
    /// The category labels from this factory carry, if any.
    pub fn category(&self) -> Option<LabelCategory> {
        match self {
            LabelFactory::Plain => None,
            LabelFactory::Status => Some(LabelCategory::Status),
            LabelFactory::Type => Some(LabelCategory::Type),
            LabelFactory::Has => Some(LabelCategory::Has),
        }
    }

    /// Qualifies `short` for this factory's category.
    ///
    /// `LabelFactory::Status.create("waiting-for-triage")` yields
    /// `status: waiting-for-triage`.
    pub fn create(&self, short: &str) -> Label {
        match self.category() {
            Some(category) => Label {
                name: format!("{}: {}", category.as_str(), short),
                category: Some(category),
            },
            None => Label::new(short),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelFactory::Plain => "plain",
            other => other.category().map_or("plain", |c| c.as_str()),
        }
    }
}

impl fmt::Display for LabelFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LabelFactory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(LabelFactory::Plain),
            "status" => Ok(LabelFactory::Status),
            "type" => Ok(LabelFactory::Type),
            "has" => Ok(LabelFactory::Has),
            _ => Err(Error::InvalidFactory(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
