// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable rule sets.
//!
//! A [`RuleSet`] is the data form of a migration configuration: field value
//! mappings, predicate labels, supersede and removal rules, milestone
//! exclusions and processors. It round-trips through TOML and JSON and is
//! turned into a [`Migration`] with [`RuleSet::build`].

use serde::{Deserialize, Serialize};

use crate::composite::CompositeLabelHandler;
use crate::error::{Error, Result};
use crate::handler::IssuePredicate;
use crate::label::LabelFactory;
use crate::mapping::{FieldKind, FieldValueLabelHandler};
use crate::milestone::{SkipListFilter, DEFAULT_SKIPPED_VERSIONS};
use crate::pipeline::Migration;
use crate::processor::{
    default_unowned_labels, AssigneeDroppingProcessor, CompositeIssueProcessor,
    DescriptionTruncatingProcessor,
};
use crate::rules::LabelPattern;

/// One field value mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSpec {
    pub field: FieldKind,
    pub value: String,
    /// Short label name, qualified by `factory`.
    pub label: String,
    /// Defaults to the field kind's factory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<LabelFactory>,
}

/// A label contributed whenever an issue predicate holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSpec {
    pub label: String,
    #[serde(default)]
    pub factory: LabelFactory,
    #[serde(flatten)]
    pub predicate: IssuePredicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersedeSpec {
    pub dominant: String,
    pub dominated: String,
}

/// Label pattern in data form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSpec {
    Equals(String),
    StartsWith(String),
    Matches(String),
}

impl PatternSpec {
    fn compile(&self) -> Result<LabelPattern> {
        match self {
            PatternSpec::Equals(name) => Ok(LabelPattern::Equals(non_empty(name, "equals")?)),
            PatternSpec::StartsWith(prefix) => {
                Ok(LabelPattern::StartsWith(non_empty(prefix, "starts_with")?))
            }
            PatternSpec::Matches(re) => LabelPattern::regex(&non_empty(re, "matches")?),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalSpec {
    pub trigger: String,
    #[serde(flatten)]
    pub pattern: PatternSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSpec {
    /// Version names that never become milestones.
    #[serde(default)]
    pub skip: Vec<String>,
}

impl Default for MilestoneSpec {
    fn default() -> Self {
        MilestoneSpec {
            skip: DEFAULT_SKIPPED_VERSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeDropSpec {
    pub backlog_marker: String,
    /// Resolved labels that mark an issue as unowned.
    #[serde(default = "default_unowned_labels")]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncateSpec {
    pub key: String,
    pub max_chars: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_drop: Option<AssigneeDropSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub truncate: Vec<TruncateSpec>,
}

/// Complete, serializable migration configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub mappings: Vec<MappingSpec>,
    #[serde(default)]
    pub predicates: Vec<PredicateSpec>,
    /// Applied in order.
    #[serde(default)]
    pub supersedes: Vec<SupersedeSpec>,
    /// Applied in order, after every supersede rule.
    #[serde(default)]
    pub removals: Vec<RemovalSpec>,
    #[serde(default)]
    pub milestones: MilestoneSpec,
    #[serde(default)]
    pub processors: ProcessorSpec,
}

fn non_empty(value: &str, what: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{} must not be empty", what)));
    }
    Ok(value.to_string())
}

impl RuleSet {
    /// Builds the label handler described by the mappings, predicates and
    /// rules.
    pub fn label_handler(&self) -> Result<CompositeLabelHandler> {
        let mut table = FieldValueLabelHandler::new();
        for mapping in &self.mappings {
            let label = non_empty(&mapping.label, "mapping label")?;
            let factory = mapping
                .factory
                .unwrap_or_else(|| mapping.field.default_factory());
            table.add_mapping_with(mapping.field, &mapping.value, &label, factory);
        }

        let mut handler = CompositeLabelHandler::new();
        handler.add_handler(table);

        for spec in &self.predicates {
            let label = spec
                .factory
                .create(&non_empty(&spec.label, "predicate label")?);
            handler.add_handler(spec.predicate.clone().into_handler(label));
        }

        for rule in &self.supersedes {
            handler.add_supersede(
                non_empty(&rule.dominant, "supersede dominant")?,
                non_empty(&rule.dominated, "supersede dominated")?,
            );
        }

        for rule in &self.removals {
            handler.add_removal(
                non_empty(&rule.trigger, "removal trigger")?,
                rule.pattern.compile()?,
            );
        }

        Ok(handler)
    }

    pub fn processor(&self) -> Result<CompositeIssueProcessor> {
        let mut processor = CompositeIssueProcessor::new();
        for truncate in &self.processors.truncate {
            if truncate.max_chars == 0 {
                return Err(Error::invalid_argument(format!(
                    "truncate max_chars for '{}' must be positive",
                    truncate.key
                )));
            }
            processor.add(DescriptionTruncatingProcessor::new(
                non_empty(&truncate.key, "truncate key")?,
                truncate.max_chars,
            ));
        }
        if let Some(drop) = &self.processors.assignee_drop {
            processor.add(AssigneeDroppingProcessor::new(
                non_empty(&drop.backlog_marker, "backlog marker")?,
                drop.labels.clone(),
            ));
        }
        Ok(processor)
    }

    /// Builds the migration pipeline.
    ///
    /// Rule conflicts do not stop the build; they are logged and can be
    /// listed with [`CompositeLabelHandler::conflicts`].
    pub fn build(&self) -> Result<Migration> {
        let labels = self.label_handler()?;
        for conflict in labels.conflicts() {
            tracing::warn!("rule conflict: {}", conflict);
        }
        let processor = self.processor()?;
        let filter = SkipListFilter::new(self.milestones.skip.iter().cloned());
        Ok(Migration::new(labels, processor).with_milestone_filter(filter))
    }

    /// The rules of the Spring Framework JIRA to GitHub migration.
    pub fn spring_framework() -> Self {
        use FieldKind::{IssueType, Resolution, Status, Tag, Version};

        let mapping = |field: FieldKind, value: &str, label: &str, factory: Option<LabelFactory>| {
            MappingSpec {
                field,
                value: value.to_string(),
                label: label.to_string(),
                factory,
            }
        };
        let predicate = |label: &str, factory: LabelFactory, predicate: IssuePredicate| {
            PredicateSpec {
                label: label.to_string(),
                factory,
                predicate,
            }
        };
        let supersede = |dominant: &str, dominated: &str| SupersedeSpec {
            dominant: dominant.to_string(),
            dominated: dominated.to_string(),
        };
        let removal = |trigger: &str, pattern: PatternSpec| RemovalSpec {
            trigger: trigger.to_string(),
            pattern,
        };
        let starts_with = |prefix: &str| PatternSpec::StartsWith(prefix.to_string());
        let equals = |name: &str| PatternSpec::Equals(name.to_string());

        RuleSet {
            mappings: vec![
                mapping(IssueType, "Bug", "bug", None),
                mapping(IssueType, "New Feature", "enhancement", None),
                mapping(IssueType, "Improvement", "enhancement", None),
                mapping(IssueType, "Refactoring", "task", None),
                mapping(IssueType, "Pruning", "task", None),
                mapping(IssueType, "Task", "task", None),
                mapping(IssueType, "Sub-task", "task", None),
                mapping(IssueType, "Epic", "epic", None),
                mapping(Resolution, "Deferred", "declined", None),
                mapping(Resolution, "Won't Do", "declined", None),
                mapping(Resolution, "Won't Fix", "declined", None),
                mapping(Resolution, "Works as Designed", "declined", None),
                mapping(Resolution, "Duplicate", "duplicate", None),
                mapping(Resolution, "Invalid", "invalid", None),
                mapping(Status, "Waiting for Feedback", "waiting-for-feedback", None),
                mapping(
                    Version,
                    "Waiting for Triage",
                    "waiting-for-triage",
                    Some(LabelFactory::Status),
                ),
                mapping(
                    Version,
                    "Contributions Welcome",
                    "ideal-for-contribution",
                    Some(LabelFactory::Status),
                ),
                mapping(Tag, "Regression", "regression", Some(LabelFactory::Type)),
            ],
            predicates: vec![
                predicate(
                    "waiting-for-triage",
                    LabelFactory::Status,
                    IssuePredicate::UnresolvedWithoutFixVersion,
                ),
                predicate(
                    "in-progress",
                    LabelFactory::Status,
                    IssuePredicate::StatusIs {
                        status: "In Progress".to_string(),
                    },
                ),
                predicate(
                    "votes-jira",
                    LabelFactory::Has,
                    IssuePredicate::VotesAtLeast { votes: 10 },
                ),
                predicate("backports", LabelFactory::Has, IssuePredicate::HasBackports),
            ],
            supersedes: vec![
                supersede("type: bug", "type: regression"),
                supersede("type: task", "type: documentation"),
                supersede("status: waiting-for-triage", "status: waiting-for-feedback"),
                supersede("status: waiting-for-triage", "status: in-progress"),
            ],
            removals: vec![
                removal("status: waiting-for-triage", starts_with("type: ")),
                removal("status: invalid", starts_with("type: ")),
                removal("status: declined", equals("type: bug")),
                removal("status: declined", equals("type: regression")),
                removal("status: duplicate", equals("type: bug")),
                removal("status: duplicate", equals("type: regression")),
            ],
            milestones: MilestoneSpec::default(),
            processors: ProcessorSpec {
                assignee_drop: Some(AssigneeDropSpec {
                    backlog_marker: "Backlog".to_string(),
                    labels: default_unowned_labels(),
                }),
                truncate: vec![TruncateSpec {
                    key: "SPR-7640".to_string(),
                    max_chars: 1000,
                }],
            },
        }
    }
}

#[cfg(test)]
#[path = "ruleset_tests.rs"]
mod tests;
