//! Chord session
//!
//! One session per binding. It holds the options, the current chord selection
//! and the row strategy, and turns a click into at most one edit of the
//! document it is handed.

use serde::Serialize;

use super::placement::{apply_row, Placement};
use super::policy::RowPolicy;
use crate::error::GeometryError;
use crate::geometry::{resolve_column, resolve_line, ClickPoint, ContainerBox, TextMeasure};
use crate::models::{ChordSelection, Options};
use crate::text::LyricsDocument;

/// Diagnostic record of one placement, logged when `verbose` is set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSnapshot {
    pub selected_chord: String,
    pub click_x: f64,
    pub click_y: f64,
    pub relative_x: f64,
    pub relative_y: f64,
    pub line_idx: usize,
    pub clicked_line: String,
    pub measured_line: String,
    pub line_width: f64,
    pub single_char_width: f64,
    pub char_idx: usize,
    pub write_idx: usize,
    pub inserted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoChordSelected,
    /// The row strategy found nothing to write for this line
    NoChordRow { line: usize },
    /// The strategy picked a row outside the document
    RowOutOfRange { line: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Placed {
        placement: Placement,
        snapshot: PlacementSnapshot,
    },
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, ClickOutcome::Placed { .. })
    }
}

pub struct ChordSession {
    options: Options,
    selection: ChordSelection,
    policy: Box<dyn RowPolicy>,
}

impl ChordSession {
    /// Session using the row strategy named in `options`
    pub fn new(options: Options) -> Self {
        let policy = options.row_policy.policy();
        Self {
            options,
            selection: ChordSelection::default(),
            policy,
        }
    }

    /// Session with a custom row strategy; `options.row_policy` is ignored
    pub fn with_policy(options: Options, policy: impl RowPolicy + 'static) -> Self {
        Self {
            options,
            selection: ChordSelection::default(),
            policy: Box::new(policy),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn selection(&self) -> &ChordSelection {
        &self.selection
    }

    /// Select the chord named by `text`. Blank text leaves the selection as is.
    pub fn select_chord(&mut self, text: &str) -> bool {
        let changed = self.selection.select(text);
        if changed {
            log::debug!("selected chord {}", self.selection.label());
        }
        changed
    }

    /// Handle a click on the lyrics container.
    ///
    /// Either applies exactly one placement to `doc` or leaves it untouched.
    pub fn click<M: TextMeasure + ?Sized>(
        &self,
        doc: &mut LyricsDocument,
        click: ClickPoint,
        container: &ContainerBox,
        measure: &M,
    ) -> Result<ClickOutcome, GeometryError> {
        let Some(chord) = self.selection.token() else {
            return Ok(self.ignore(IgnoreReason::NoChordSelected));
        };

        let line_hit = resolve_line(click, container, doc.line_count())?;
        let Some(target) = self.policy.select_row(doc.lines(), line_hit.line) else {
            return Ok(self.ignore(IgnoreReason::NoChordRow {
                line: line_hit.line,
            }));
        };
        let Some(measured_line) = doc.line(target.measure_line) else {
            return Ok(self.ignore(IgnoreReason::RowOutOfRange {
                line: line_hit.line,
            }));
        };
        let column_hit = resolve_column(click, container, measured_line, measure)?;

        let snapshot = PlacementSnapshot {
            selected_chord: chord.to_string(),
            click_x: click.x,
            click_y: click.y,
            relative_x: column_hit.relative_x,
            relative_y: line_hit.relative_y,
            line_idx: line_hit.line,
            clicked_line: doc.lines()[line_hit.line].clone(),
            measured_line: measured_line.to_string(),
            line_width: column_hit.line_width,
            single_char_width: column_hit.char_width,
            char_idx: column_hit.col,
            write_idx: target.row.index(),
            inserted: target.row.inserts(),
        };

        let Some(placement) = apply_row(doc.lines_mut(), target.row, column_hit.col, chord.as_str())
        else {
            return Ok(self.ignore(IgnoreReason::RowOutOfRange {
                line: line_hit.line,
            }));
        };

        if self.options.verbose {
            match serde_json::to_string(&snapshot) {
                Ok(json) => log::info!("{}", json),
                Err(e) => log::warn!("failed to serialize placement snapshot: {}", e),
            }
        }

        Ok(ClickOutcome::Placed {
            placement,
            snapshot,
        })
    }

    fn ignore(&self, reason: IgnoreReason) -> ClickOutcome {
        if self.options.verbose {
            match reason {
                IgnoreReason::NoChordSelected => log::info!("no chord selected"),
                IgnoreReason::NoChordRow { line } => log::info!("no chord row for line {}", line),
                IgnoreReason::RowOutOfRange { line } => {
                    log::info!("chord row for line {} is out of range", line)
                }
            }
        }
        ClickOutcome::Ignored(reason)
    }
}

impl Default for ChordSession {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl std::fmt::Debug for ChordSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChordSession")
            .field("options", &self.options)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MonospaceMeasure;
    use crate::models::RowPolicyKind;

    const CHAR: f64 = 10.0;
    const LINE: f64 = 20.0;

    fn container_for(doc: &LyricsDocument) -> ContainerBox {
        ContainerBox::new(0.0, 0.0, 800.0, LINE * doc.line_count() as f64)
    }

    fn click_at(line: usize, col: usize) -> ClickPoint {
        ClickPoint::new(col as f64 * CHAR + 1.0, line as f64 * LINE + 1.0)
    }

    #[test]
    fn test_no_selection_is_ignored() {
        let session = ChordSession::default();
        let mut doc = LyricsDocument::from_text("Hello world");
        let container = container_for(&doc);

        let outcome = session
            .click(&mut doc, click_at(0, 0), &container, &MonospaceMeasure::new(CHAR))
            .unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::NoChordSelected));
        assert_eq!(doc.to_text(), "Hello world");
    }

    #[test]
    fn test_click_places_and_reports() {
        let mut session = ChordSession::default();
        session.select_chord("G");
        let mut doc = LyricsDocument::from_text("Hello world");
        let container = container_for(&doc);

        let outcome = session
            .click(&mut doc, click_at(0, 6), &container, &MonospaceMeasure::new(CHAR))
            .unwrap();

        assert_eq!(doc.to_text(), "      G\nHello world");
        let ClickOutcome::Placed { placement, snapshot } = outcome else {
            panic!("expected a placement");
        };
        assert!(placement.inserted);
        assert_eq!(snapshot.char_idx, 6);
        assert_eq!(snapshot.line_width, 110.0);
        assert_eq!(snapshot.single_char_width, CHAR);
        assert_eq!(snapshot.clicked_line, "Hello world");
    }

    #[test]
    fn test_geometry_error_leaves_document() {
        let mut session = ChordSession::default();
        session.select_chord("G");
        let mut doc = LyricsDocument::from_text("Hello world");
        let flat = ContainerBox::new(0.0, 0.0, 800.0, 0.0);

        let result = session.click(&mut doc, click_at(0, 1), &flat, &MonospaceMeasure::new(CHAR));
        assert!(result.is_err());
        assert_eq!(doc.to_text(), "Hello world");
    }

    #[test]
    fn test_scan_forward_session_writes_clicked_row() {
        let options = Options {
            row_policy: RowPolicyKind::ScanForward,
            ..Options::default()
        };
        let mut session = ChordSession::new(options);
        session.select_chord("Em");
        let mut doc = LyricsDocument::from_text("C\nHello world");
        let container = container_for(&doc);

        let outcome = session
            .click(&mut doc, click_at(0, 4), &container, &MonospaceMeasure::new(CHAR))
            .unwrap();
        assert!(outcome.is_placed());
        assert_eq!(doc.to_text(), "C   Em\nHello world");
    }

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let mut session = ChordSession::default();
        session.select_chord("Am");
        let mut doc = LyricsDocument::from_text("\nHello world");
        let container = container_for(&doc);

        let outcome = session
            .click(&mut doc, click_at(1, 0), &container, &MonospaceMeasure::new(CHAR))
            .unwrap();
        let ClickOutcome::Placed { snapshot, .. } = outcome else {
            panic!("expected a placement");
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["selectedChord"], "Am");
        assert_eq!(json["lineIdx"], 1);
        assert_eq!(json["writeIdx"], 0);
        assert_eq!(json["singleCharWidth"], 10.0);
    }
}
