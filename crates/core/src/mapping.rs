// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field value mapping table and the table-driven label handler.
//!
//! The table maps `(field kind, field value)` pairs to a short label name and
//! the factory that qualifies it. Values without an entry are deliberately
//! silent: many source values carry no meaning in the target tracker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::handler::LabelHandler;
use crate::issue::Issue;
use crate::label::{LabelFactory, LabelSet};

/// The category of a source field used as a mapping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[serde(rename = "type")]
    IssueType,
    Resolution,
    Status,
    /// Fix version and every backport version.
    Version,
    /// Free-form source labels.
    #[serde(alias = "label")]
    Tag,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::IssueType => "type",
            FieldKind::Resolution => "resolution",
            FieldKind::Status => "status",
            FieldKind::Version => "version",
            FieldKind::Tag => "tag",
        }
    }

    /// Factory used when a mapping does not name one.
    pub fn default_factory(&self) -> LabelFactory {
        match self {
            FieldKind::IssueType => LabelFactory::Type,
            FieldKind::Resolution | FieldKind::Status => LabelFactory::Status,
            FieldKind::Version | FieldKind::Tag => LabelFactory::Plain,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "type" | "issue_type" => Ok(FieldKind::IssueType),
            "resolution" => Ok(FieldKind::Resolution),
            "status" => Ok(FieldKind::Status),
            "version" => Ok(FieldKind::Version),
            "tag" | "label" => Ok(FieldKind::Tag),
            _ => Err(Error::InvalidFieldKind(s.to_string())),
        }
    }
}

/// Target of one mapping table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTarget {
    pub label: String,
    pub factory: LabelFactory,
}

/// Label handler backed by a field value mapping table.
#[derive(Debug, Clone, Default)]
pub struct FieldValueLabelHandler {
    entries: BTreeMap<(FieldKind, String), MappingTarget>,
}

impl FieldValueLabelHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `value` of `kind` to `label`, qualified by the kind's default factory.
    pub fn add_mapping(&mut self, kind: FieldKind, value: &str, label: &str) {
        self.add_mapping_with(kind, value, label, kind.default_factory());
    }

    /// Maps `value` of `kind` to `label`, qualified by `factory`.
    ///
    /// A later registration for the same `(kind, value)` replaces the earlier one.
    pub fn add_mapping_with(
        &mut self,
        kind: FieldKind,
        value: &str,
        label: &str,
        factory: LabelFactory,
    ) {
        let target = MappingTarget {
            label: label.to_string(),
            factory,
        };
        if let Some(previous) = self.entries.insert((kind, value.to_string()), target) {
            tracing::debug!(
                "mapping for {} '{}' replaced (was '{}')",
                kind,
                value,
                previous.label
            );
        }
    }

    /// Looks up the entry for `(kind, value)`.
    pub fn get(&self, kind: FieldKind, value: &str) -> Option<&MappingTarget> {
        self.entries.get(&(kind, value.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn emit(&self, kind: FieldKind, value: &str, labels: &mut LabelSet) {
        if let Some(target) = self.get(kind, value) {
            labels.insert(target.factory.create(&target.label).into_name());
        }
    }
}

impl LabelHandler for FieldValueLabelHandler {
    fn compute_labels(&self, issue: &Issue) -> LabelSet {
        let mut labels = LabelSet::new();

        self.emit(FieldKind::IssueType, &issue.issue_type, &mut labels);
        if let Some(resolution) = &issue.resolution {
            self.emit(FieldKind::Resolution, resolution, &mut labels);
        }
        self.emit(FieldKind::Status, &issue.status, &mut labels);
        for name in issue.version_names() {
            self.emit(FieldKind::Version, name, &mut labels);
        }
        for tag in &issue.tags {
            self.emit(FieldKind::Tag, tag, &mut labels);
        }

        labels
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
