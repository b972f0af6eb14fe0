//! Line and whitespace cleanup rules.
//!
//! Line-oriented rules split on `\n` only. A trailing newline therefore
//! produces a final empty line, which sorts first and gets its own number.

use std::collections::HashSet;

/// Collapse runs of non-newline whitespace to a single space and trim each line.
pub fn collapse_whitespace(input: &str) -> String {
    input
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are empty or contain only whitespace.
pub fn remove_empty_lines(input: &str) -> String {
    input
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join all non-empty lines into one, separated by single spaces.
pub fn remove_line_breaks(input: &str) -> String {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort whole lines by code point.
pub fn sort_lines(input: &str) -> String {
    let mut lines: Vec<&str> = input.split('\n').collect();
    // UTF-8 byte order is code point order
    lines.sort_unstable();
    lines.join("\n")
}

/// Keep the first occurrence of each distinct line, in original order.
pub fn dedupe_lines(input: &str) -> String {
    let mut seen = HashSet::new();
    input
        .split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line with its 1-based number: `"{n}. {line}"`.
pub fn number_lines(input: &str) -> String {
    input
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
