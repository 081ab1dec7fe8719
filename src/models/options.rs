//! Binding options
//!
//! Resolved once per binding. Every field falls back to its default on its own,
//! so `{ verbose: true }` keeps the default marker classes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SELECTED_CHORD_CLASS: &str = "is-selected";
pub const DEFAULT_CHORD_CLASS: &str = "chord";

/// Which row-selection strategy a binding uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowPolicyKind {
    /// Chord row is always the line directly above the clicked lyrics line
    #[default]
    RowAbove,
    /// Reuse the clicked or preceding chord row, create one otherwise
    ReuseOrCreate,
    /// The clicked non-lyrics line is the chord row
    ScanForward,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Log a snapshot of every placement computation
    pub verbose: bool,

    /// CSS class marking the active chord token
    pub selected_chord_class: String,

    /// CSS class identifying chord tokens inside the picker
    pub chord_class: String,

    pub row_policy: RowPolicyKind,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            verbose: false,
            selected_chord_class: DEFAULT_SELECTED_CHORD_CLASS.to_string(),
            chord_class: DEFAULT_CHORD_CLASS.to_string(),
            row_policy: RowPolicyKind::default(),
        }
    }
}

impl Options {
    /// Parse options from a JSON object, defaulting missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
