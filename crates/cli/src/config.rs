// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file loading and rendering.
//!
//! Rule files hold a [`RuleSet`] in TOML or JSON, chosen by extension. When no
//! file is given on the command line, `ferry.toml` or `ferry.json` in the
//! working directory is used, and failing that the built-in rule set.

use clap::ValueEnum;
use ferry_core::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const RULES_TOML_FILE: &str = "ferry.toml";
const RULES_JSON_FILE: &str = "ferry.json";

/// Serialization format of a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RuleFormat {
    #[default]
    Toml,
    Json,
}

impl RuleFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(RuleFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(RuleFormat::Json),
            _ => Err(Error::UnsupportedRuleFile {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Where the effective rule set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    File(PathBuf),
    BuiltIn,
}

/// Resolves the rule source: an explicit path wins, then a rule file in `dir`.
pub fn resolve_rules(explicit: Option<&Path>, dir: &Path) -> RuleSource {
    if let Some(path) = explicit {
        return RuleSource::File(path.to_path_buf());
    }
    [RULES_TOML_FILE, RULES_JSON_FILE]
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .map_or(RuleSource::BuiltIn, RuleSource::File)
}

pub fn parse_rules(content: &str, format: RuleFormat, name: &str) -> Result<RuleSet> {
    match format {
        RuleFormat::Toml => toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", name, e))),
        RuleFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", name, e))),
    }
}

/// Reads a rule file.
pub fn load_rules_file(path: &Path) -> Result<RuleSet> {
    let format = RuleFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
    parse_rules(&content, format, &path.display().to_string())
}

/// Loads the effective rule set for a command.
pub fn load_rules(explicit: Option<&Path>, dir: &Path) -> Result<RuleSet> {
    match resolve_rules(explicit, dir) {
        RuleSource::File(path) => {
            tracing::debug!("loading rules from {}", path.display());
            load_rules_file(&path)
        }
        RuleSource::BuiltIn => Ok(RuleSet::spring_framework()),
    }
}

pub fn render_rules(rules: &RuleSet, format: RuleFormat) -> Result<String> {
    match format {
        RuleFormat::Toml => toml::to_string_pretty(rules)
            .map_err(|e| Error::Config(format!("failed to render rules: {}", e))),
        RuleFormat::Json => Ok(serde_json::to_string_pretty(rules)?),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
