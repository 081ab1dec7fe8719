//! Chord stamping
//!
//! A chord overwrites exactly as many columns as it is wide. Nothing to its
//! right moves.

use crate::text::ColumnSpan;

/// Write `chord` into `line` starting at column `col`.
///
/// The line is padded with spaces up to `col` first. Characters past the
/// chord's span are kept as they were.
pub fn add_chord(line: &str, col: usize, chord: &str) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    if chars.len() < col {
        chars.resize(col, ' ');
    }

    let span = ColumnSpan::at(col, chord.chars().count());
    let end = span.end.min(chars.len());
    chars.splice(span.start..end, chord.chars());

    chars.into_iter().collect()
}
