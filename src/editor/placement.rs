//! Chord placement on a line buffer

use serde::{Deserialize, Serialize};

use super::policy::{RowAbove, RowChoice, RowPolicy};
use super::stamp::add_chord;
use crate::text::ColumnSpan;

/// What a placement wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the chord row after the edit
    pub row: usize,
    /// Whether a new line was inserted for the row
    pub inserted: bool,
    /// Columns the chord now covers
    pub span: ColumnSpan,
}

/// Stamp `chord` into the chosen row.
///
/// Returns `None` if the row index does not fit the buffer, leaving it untouched.
pub fn apply_row(
    lines: &mut Vec<String>,
    row: RowChoice,
    col: usize,
    chord: &str,
) -> Option<Placement> {
    match row {
        RowChoice::Existing(idx) => {
            let line = lines.get_mut(idx)?;
            *line = add_chord(line, col, chord);
        }
        RowChoice::Insert(idx) => {
            if idx > lines.len() {
                return None;
            }
            lines.insert(idx, add_chord("", col, chord));
        }
    }

    Some(Placement {
        row: row.index(),
        inserted: row.inserts(),
        span: ColumnSpan::at(col, chord.chars().count()),
    })
}

/// Place `chord` above lyrics line `line` at column `col`, using the row
/// directly above the lyrics.
pub fn place_chord(
    lines: &mut Vec<String>,
    line: usize,
    col: usize,
    chord: &str,
) -> Option<Placement> {
    place_chord_with(&RowAbove, lines, line, col, chord)
}

/// Place `chord` for a click on `line` using any row strategy
pub fn place_chord_with<P: RowPolicy + ?Sized>(
    policy: &P,
    lines: &mut Vec<String>,
    line: usize,
    col: usize,
    chord: &str,
) -> Option<Placement> {
    let target = policy.select_row(lines, line)?;
    let placement = apply_row(lines, target.row, col, chord);
    if placement.is_none() {
        log::warn!("row {:?} does not fit a {}-line document", target.row, lines.len());
    }
    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::policy::RowTarget;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_existing_empty_row_is_reused() {
        let mut doc = lines(&["", "Hello world"]);
        let placement = place_chord(&mut doc, 1, 0, "Am").unwrap();

        assert_eq!(doc, lines(&["Am", "Hello world"]));
        assert_eq!(placement.row, 0);
        assert!(!placement.inserted);
    }

    #[test]
    fn test_first_line_gets_new_row() {
        let mut doc = lines(&["Hello world"]);
        let placement = place_chord(&mut doc, 0, 6, "G").unwrap();

        assert_eq!(doc, lines(&["      G", "Hello world"]));
        assert_eq!(placement.row, 0);
        assert!(placement.inserted);
        assert_eq!(placement.span, ColumnSpan::new(6, 7));
    }

    #[test]
    fn test_stacked_lyrics_get_row_between() {
        let mut doc = lines(&["First line here", "Second line here", "C"]);
        let placement = place_chord(&mut doc, 1, 2, "D").unwrap();

        assert_eq!(
            doc,
            lines(&["First line here", "  D", "Second line here", "C"])
        );
        assert_eq!(placement.row, 1);
    }

    #[test]
    fn test_chords_on_same_row_accumulate() {
        let mut doc = lines(&["", "Hello world"]);
        place_chord(&mut doc, 1, 0, "C").unwrap();
        place_chord(&mut doc, 1, 6, "G").unwrap();
        assert_eq!(doc, lines(&["C     G", "Hello world"]));
    }

    #[test]
    fn test_non_lyrics_click_is_noop() {
        let mut doc = lines(&["C   G", "Hello world", ""]);
        let before = doc.clone();

        assert_eq!(place_chord(&mut doc, 0, 1, "Am"), None);
        assert_eq!(place_chord(&mut doc, 2, 1, "Am"), None);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_out_of_range_row_is_rejected() {
        let bogus = |_: &[String], _: usize| {
            Some(RowTarget {
                row: RowChoice::Existing(9),
                measure_line: 0,
            })
        };
        let mut doc = lines(&["Hello world"]);
        assert_eq!(place_chord_with(&bogus, &mut doc, 0, 0, "C"), None);
        assert_eq!(doc, lines(&["Hello world"]));

        assert_eq!(apply_row(&mut doc, RowChoice::Insert(5), 0, "C"), None);
        assert_eq!(apply_row(&mut doc, RowChoice::Insert(1), 0, "C").map(|p| p.row), Some(1));
    }
}
