// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composite label handler: contribution followed by central resolution.
//!
//! Handlers contribute candidate labels independently and never see each
//! other's output. Conflicts are then settled in two single passes, supersede
//! rules first and removal rules second. The passes are not iterated to a
//! fixed point; [`CompositeLabelHandler::conflicts`] reports rule sets for
//! which that would make a difference.

use std::fmt;

use crate::handler::{LabelHandler, PredicateLabelHandler};
use crate::issue::Issue;
use crate::label::{Label, LabelSet};
use crate::rules::{LabelPattern, RemovalRule, SupersedeRule};

/// A rule combination that the single-pass resolution cannot handle faithfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleConflict {
    /// A removal on `trigger` strips `dominant`, but nothing on the same
    /// trigger strips `dominated`, which was only dropped because of `dominant`.
    OrphanedSupersede {
        trigger: String,
        dominant: String,
        dominated: String,
    },
    /// A removal trigger can itself be superseded before the removal pass runs.
    TriggerSuperseded { trigger: String, dominant: String },
    /// A removal trigger can be stripped by another removal rule, so the
    /// outcome depends on rule order.
    TriggerRemoved { trigger: String, by: String },
}

impl fmt::Display for RuleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleConflict::OrphanedSupersede {
                trigger,
                dominant,
                dominated,
            } => write!(
                f,
                "'{}' removes '{}' but not '{}', which '{}' supersedes",
                trigger, dominant, dominated, dominant
            ),
            RuleConflict::TriggerSuperseded { trigger, dominant } => write!(
                f,
                "removal trigger '{}' is superseded by '{}'",
                trigger, dominant
            ),
            RuleConflict::TriggerRemoved { trigger, by } => write!(
                f,
                "removal trigger '{}' is removed by the rule on '{}'",
                trigger, by
            ),
        }
    }
}

/// Aggregates label handlers with supersede and removal rules.
///
/// Built once at configuration time and read-only afterwards; it is
/// `Send + Sync` so worker threads can share it while each processes a
/// distinct issue.
#[derive(Default)]
pub struct CompositeLabelHandler {
    handlers: Vec<Box<dyn LabelHandler>>,
    supersedes: Vec<SupersedeRule>,
    removals: Vec<RemovalRule>,
}

impl CompositeLabelHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Registration order does not change the union.
    pub fn add_handler<H>(&mut self, handler: H)
    where
        H: LabelHandler + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Registers a handler contributing `label` whenever `predicate` holds.
    pub fn add_predicate<F>(&mut self, label: Label, predicate: F)
    where
        F: Fn(&Issue) -> bool + Send + Sync + 'static,
    {
        self.add_handler(PredicateLabelHandler::new(label, predicate));
    }

    pub fn add_supersede(&mut self, dominant: impl Into<String>, dominated: impl Into<String>) {
        self.supersedes.push(SupersedeRule::new(dominant, dominated));
    }

    pub fn add_removal(&mut self, trigger: impl Into<String>, pattern: LabelPattern) {
        self.removals.push(RemovalRule::new(trigger, pattern));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn supersedes(&self) -> &[SupersedeRule] {
        &self.supersedes
    }

    pub fn removals(&self) -> &[RemovalRule] {
        &self.removals
    }

    /// Runs every handler and resolves the combined set.
    pub fn compute_labels(&self, issue: &Issue) -> LabelSet {
        let mut labels = LabelSet::new();
        for handler in &self.handlers {
            labels.extend(handler.compute_labels(issue));
        }
        self.resolve(issue, &mut labels);
        labels
    }

    fn resolve(&self, issue: &Issue, labels: &mut LabelSet) {
        for rule in &self.supersedes {
            if rule.apply(labels) {
                tracing::debug!(
                    "{}: '{}' superseded by '{}'",
                    issue.key,
                    rule.dominated,
                    rule.dominant
                );
            }
        }

        for rule in &self.removals {
            for removed in rule.apply(labels) {
                tracing::debug!(
                    "{}: '{}' removed by '{}'",
                    issue.key,
                    removed,
                    rule.trigger
                );
            }
        }
    }

    /// Every (removal, supersede) pair whose removal pattern matches the
    /// supersede rule's dominant label.
    pub fn dominant_overlaps(&self) -> Vec<(&RemovalRule, &SupersedeRule)> {
        let mut overlaps = Vec::new();
        for removal in &self.removals {
            for supersede in &self.supersedes {
                if supersede.dominant != removal.trigger
                    && removal.pattern.matches(&supersede.dominant)
                {
                    overlaps.push((removal, supersede));
                }
            }
        }
        overlaps
    }

    /// Static check of the rule set against the single-pass assumption.
    ///
    /// An empty result means resolving in one pass gives the same labels a
    /// fixed-point iteration would.
    pub fn conflicts(&self) -> Vec<RuleConflict> {
        let mut conflicts = Vec::new();

        for (removal, supersede) in self.dominant_overlaps() {
            let covered = self.removals.iter().any(|other| {
                other.trigger == removal.trigger
                    && supersede.dominated != other.trigger
                    && other.pattern.matches(&supersede.dominated)
            });
            if !covered {
                conflicts.push(RuleConflict::OrphanedSupersede {
                    trigger: removal.trigger.clone(),
                    dominant: supersede.dominant.clone(),
                    dominated: supersede.dominated.clone(),
                });
            }
        }

        for removal in &self.removals {
            for supersede in &self.supersedes {
                if supersede.dominated == removal.trigger {
                    let conflict = RuleConflict::TriggerSuperseded {
                        trigger: removal.trigger.clone(),
                        dominant: supersede.dominant.clone(),
                    };
                    if !conflicts.contains(&conflict) {
                        conflicts.push(conflict);
                    }
                }
            }
            for other in &self.removals {
                if other.trigger != removal.trigger && other.pattern.matches(&removal.trigger) {
                    let conflict = RuleConflict::TriggerRemoved {
                        trigger: removal.trigger.clone(),
                        by: other.trigger.clone(),
                    };
                    if !conflicts.contains(&conflict) {
                        conflicts.push(conflict);
                    }
                }
            }
        }

        conflicts
    }
}

impl LabelHandler for CompositeLabelHandler {
    fn compute_labels(&self, issue: &Issue) -> LabelSet {
        CompositeLabelHandler::compute_labels(self, issue)
    }
}

impl fmt::Debug for CompositeLabelHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeLabelHandler")
            .field("handlers", &self.handlers.len())
            .field("supersedes", &self.supersedes)
            .field("removals", &self.removals)
            .finish()
    }
}

#[cfg(test)]
#[path = "composite_tests.rs"]
mod tests;
