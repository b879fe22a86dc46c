// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output palette.
//!
//! Colors are on for terminals, off with `NO_COLOR=1` and forced on with
//! `COLOR=1`.

use anstyle::{Ansi256Color, Color, Style};
use std::io::IsTerminal;

/// Section titles.
pub const HEADER: Style = fg(74);
/// Commands and flags.
pub const LITERAL: Style = fg(250);
/// Placeholders and defaults.
pub const CONTEXT: Style = fg(245);

const fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

pub fn should_colorize() -> bool {
    match (std::env::var("NO_COLOR"), std::env::var("COLOR")) {
        (Ok(v), _) if v == "1" => false,
        (_, Ok(v)) if v == "1" => true,
        _ => std::io::stdout().is_terminal(),
    }
}

/// Wraps `text` in `style`.
pub fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub fn header(text: &str) -> String {
    paint(HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(LITERAL, text)
}

/// Colors an examples block when colors are enabled.
///
/// A line ending in `:` is a title. Otherwise the text before the first run of
/// two spaces is a command line, with `<...>` words painted as placeholders.
pub fn examples(text: &str) -> String {
    if should_colorize() {
        paint_examples(text)
    } else {
        text.to_string()
    }
}

fn paint_examples(text: &str) -> String {
    text.lines().map(paint_example_line).collect::<Vec<_>>().join("\n")
}

fn paint_example_line(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    if body.ends_with(':') && !body.contains("  ") {
        return format!("{}{}", indent, header(body));
    }
    match split_command(body) {
        Some((command, rest)) => format!("{}{}{}", indent, paint_command(command), rest),
        None => line.to_string(),
    }
}

/// Splits a help line into its command and the padded description.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let gap = line.find("  ")?;
    let (command, rest) = line.split_at(gap);
    if rest.trim().is_empty() {
        None
    } else {
        Some((command, rest))
    }
}

pub fn paint_command(command: &str) -> String {
    let words: Vec<String> = command
        .split(' ')
        .map(|word| match word {
            "" => String::new(),
            w if w.starts_with('<') && w.ends_with('>') => paint(CONTEXT, w),
            w => literal(w),
        })
        .collect();
    words.join(" ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
