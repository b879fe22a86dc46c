// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    Styles::styled()
        .header(colors::HEADER)
        .usage(colors::HEADER)
        .literal(colors::LITERAL)
        .placeholder(colors::CONTEXT)
        .valid(colors::CONTEXT)
}

fn title(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn command(name: &str) -> String {
    if colors::should_colorize() {
        colors::literal(name)
    } else {
        name.to_string()
    }
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        title("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_migration}
  {migrate}     Convert issues into import requests
  {labels}      Show the labels each issue resolves to
  {milestones}  List milestones to create

{header_rules}
  {check}       Check the rule set for conflicts
  {rules}       Print the effective rule set

{header_other}
  {report}      Report on triage issues
  {completion}  Generate shell completions
",
        header_migration = title("Migration:"),
        header_rules = title("Rules:"),
        header_other = title("Other:"),
        migrate = command("migrate"),
        labels = command("labels"),
        milestones = command("milestones"),
        check = command("check"),
        rules = command("rules"),
        report = command("report"),
        completion = command("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  ferry rules > ferry.toml                 Start from the built-in rules
  ferry check                              Check ferry.toml for conflicts
  ferry labels issues.jsonl                Preview labels
  ferry migrate issues.jsonl -O out.jsonl  Write import requests",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
