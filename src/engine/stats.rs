//! Live word/character/line counts.

use serde::Serialize;

/// Stats readout for a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Whitespace-delimited tokens
    pub words: usize,
    /// Unicode scalar values, not bytes
    pub characters: usize,
    /// `\n`-delimited segments of the trimmed text
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let trimmed = text.trim();
        let lines = if trimmed.is_empty() {
            0
        } else {
            trimmed.split('\n').count()
        };

        Self {
            words: trimmed.split_whitespace().count(),
            characters: text.chars().count(),
            lines,
        }
    }

    /// One-line summary for the status readout
    pub fn summary(&self) -> String {
        format!(
            "{} word{} | {} char{} | {} line{}",
            self.words,
            plural(self.words),
            self.characters,
            plural(self.characters),
            self.lines,
            plural(self.lines)
        )
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
