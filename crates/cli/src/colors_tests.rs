// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn paint_wraps_text_in_style_and_reset() {
    let painted = header("Examples:");
    assert!(painted.starts_with("\x1b[38;5;74m"));
    assert!(painted.contains("Examples:"));
    assert!(painted.ends_with("\x1b[0m"));
}

#[test]
fn plain_style_leaves_text_alone() {
    assert_eq!(paint(Style::new(), "ferry"), "ferry");
}

#[parameterized(
    simple = { "ferry check  Check rules", Some(("ferry check", "  Check rules")) },
    wide_gap = { "ferry rules --output json     Print", Some(("ferry rules --output json", "     Print")) },
    no_description = { "ferry check", None },
    trailing_spaces = { "ferry check   ", None },
)]
fn command_split(line: &str, expected: Option<(&str, &str)>) {
    assert_eq!(split_command(line), expected);
}

#[test]
fn placeholders_use_context_style() {
    let painted = paint_command("ferry labels <input>");
    assert!(painted.contains(&literal("ferry")));
    assert!(painted.contains(&literal("labels")));
    assert!(painted.contains(&paint(CONTEXT, "<input>")));
}

#[test]
fn examples_block_paints_titles_and_commands() {
    let painted = paint_examples("Examples:\n  ferry check  Check the rules\n  plain text");
    let lines: Vec<&str> = painted.lines().collect();
    assert_eq!(lines[0], header("Examples:"));
    assert_eq!(
        lines[1],
        format!("  {}  Check the rules", paint_command("ferry check"))
    );
    assert_eq!(lines[2], "  plain text");
}
