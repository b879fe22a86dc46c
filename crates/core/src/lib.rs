// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ferry-core: label derivation and migration pipeline for moving issues
//! between trackers.
//!
//! Source issues are turned into categorized labels by independent handlers,
//! reconciled by supersede and removal rules, adjusted by issue processors
//! and packaged as import requests for the target tracker.

pub mod composite;
pub mod error;
pub mod handler;
pub mod import;
pub mod issue;
pub mod label;
pub mod mapping;
pub mod milestone;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod rules;
pub mod ruleset;

pub use composite::{CompositeLabelHandler, RuleConflict};
pub use error::{Error, Result};
pub use handler::{IssuePredicate, LabelHandler, PredicateLabelHandler};
pub use import::{ImportComment, ImportIssue, ImportRequest};
pub use issue::{Comment, Issue, Version};
pub use label::{Label, LabelCategory, LabelFactory, LabelSet};
pub use mapping::{FieldKind, FieldValueLabelHandler};
pub use milestone::{collect_milestones, Milestone, MilestoneFilter, SkipListFilter};
pub use pipeline::{Migration, Outcome};
pub use processor::{
    default_unowned_labels, AssigneeDroppingProcessor, CompositeIssueProcessor,
    DescriptionTruncatingProcessor, Disposition, IssueProcessor,
};
pub use report::{run_report, IssueFilter, Report, ReportContext, ReportOrder, Top};
pub use rules::{LabelPattern, RemovalRule, SupersedeRule};
pub use ruleset::RuleSet;
