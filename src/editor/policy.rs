//! Chord row selection strategies
//!
//! A strategy looks at the clicked line and decides which physical line
//! receives the chord, and which line the column is measured on. Indices in a
//! [`RowTarget`] refer to the lines as they are before any insertion.

use serde::{Deserialize, Serialize};

use crate::models::RowPolicyKind;
use crate::text::{is_blank_line, is_lyrics_line};

/// Where the chord is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowChoice {
    /// Stamp into the line at this index
    Existing(usize),
    /// Insert a new line at this index, shifting that line and the rest down
    Insert(usize),
}

impl RowChoice {
    /// Index of the chord row after the edit
    pub fn index(&self) -> usize {
        match self {
            RowChoice::Existing(idx) | RowChoice::Insert(idx) => *idx,
        }
    }

    pub fn inserts(&self) -> bool {
        matches!(self, RowChoice::Insert(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowTarget {
    pub row: RowChoice,
    /// Line whose rendered width gives the character advance
    pub measure_line: usize,
}

pub trait RowPolicy {
    /// Pick the chord row for a click on `line`, or `None` to ignore the click
    fn select_row(&self, lines: &[String], line: usize) -> Option<RowTarget>;
}

impl<F> RowPolicy for F
where
    F: Fn(&[String], usize) -> Option<RowTarget>,
{
    fn select_row(&self, lines: &[String], line: usize) -> Option<RowTarget> {
        self(lines, line)
    }
}

/// The chord row is the line directly above the clicked lyrics line.
///
/// A lyrics line above (or no line at all) means there is no row yet and one
/// is inserted. Any other line above, empty or not, is reused.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowAbove;

impl RowPolicy for RowAbove {
    fn select_row(&self, lines: &[String], line: usize) -> Option<RowTarget> {
        let clicked = lines.get(line)?;
        if !is_lyrics_line(clicked) {
            return None;
        }

        let row = match line.checked_sub(1) {
            Some(above) if !is_lyrics_line(&lines[above]) => RowChoice::Existing(above),
            _ => RowChoice::Insert(line),
        };

        Some(RowTarget {
            row,
            measure_line: line,
        })
    }
}

/// Reuse whatever chord row the click points at, create one otherwise.
///
/// Blank lines are kept as stanza separators: clicking one inserts a fresh row
/// in its place and pushes the blank line down.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReuseOrCreate;

impl RowPolicy for ReuseOrCreate {
    fn select_row(&self, lines: &[String], line: usize) -> Option<RowTarget> {
        let clicked = lines.get(line)?;

        if is_blank_line(clicked) {
            return Some(RowTarget {
                row: RowChoice::Insert(line),
                measure_line: next_line(lines, line + 1, |l| !is_blank_line(l)).unwrap_or(line),
            });
        }

        if !is_lyrics_line(clicked) {
            return Some(RowTarget {
                row: RowChoice::Existing(line),
                measure_line: next_line(lines, line + 1, |l| !is_blank_line(l)).unwrap_or(line),
            });
        }

        let row = match line.checked_sub(1) {
            Some(above) if !is_lyrics_line(&lines[above]) => RowChoice::Existing(above),
            _ => RowChoice::Insert(line),
        };
        Some(RowTarget {
            row,
            measure_line: line,
        })
    }
}

/// The clicked line is the chord row, as long as it is not lyrics.
///
/// Columns are measured on the next lyrics line below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanForward;

impl RowPolicy for ScanForward {
    fn select_row(&self, lines: &[String], line: usize) -> Option<RowTarget> {
        let clicked = lines.get(line)?;
        if is_lyrics_line(clicked) {
            return None;
        }

        Some(RowTarget {
            row: RowChoice::Existing(line),
            measure_line: next_line(lines, line + 1, is_lyrics_line).unwrap_or(line),
        })
    }
}

fn next_line(lines: &[String], from: usize, accept: impl Fn(&str) -> bool) -> Option<usize> {
    (from..lines.len()).find(|&idx| accept(&lines[idx]))
}

impl RowPolicyKind {
    pub fn policy(self) -> Box<dyn RowPolicy> {
        match self {
            RowPolicyKind::RowAbove => Box::new(RowAbove),
            RowPolicyKind::ReuseOrCreate => Box::new(ReuseOrCreate),
            RowPolicyKind::ScanForward => Box::new(ScanForward),
        }
    }
}
