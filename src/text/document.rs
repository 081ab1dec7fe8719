//! Lyrics document
//!
//! The element text split on `\n`. Splitting is exact: `join` gives back the
//! original text byte for byte, trailing newline and `\r` included.

use serde::{Deserialize, Serialize};

use super::classify::LineKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsDocument {
    lines: Vec<String>,
}

impl LyricsDocument {
    /// Split text into lines. Empty text is one empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Create a document from lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };

        Self { lines }
    }

    /// Join lines back into element text
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Mutable access for the line editor
    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn kind(&self, index: usize) -> Option<LineKind> {
        self.line(index).map(LineKind::of)
    }
}

impl Default for LyricsDocument {
    fn default() -> Self {
        Self::from_lines(Vec::new())
    }
}

impl std::fmt::Display for LyricsDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
