//! Line editor
//!
//! Decides which line is the chord row for a clicked lyrics line and stamps
//! the chord into it.
//!
//! ## Modules
//!
//! - `stamp`: overwrite a span of a line with a chord
//! - `policy`: swappable chord row strategies
//! - `placement`: apply a strategy's choice to a line buffer
//! - `session`: per-binding selection state and click handling

pub mod placement;
pub mod policy;
pub mod session;
pub mod stamp;

pub use placement::{apply_row, place_chord, place_chord_with, Placement};
pub use policy::{ReuseOrCreate, RowAbove, RowChoice, RowPolicy, RowTarget, ScanForward};
pub use session::{ChordSession, ClickOutcome, IgnoreReason, PlacementSnapshot};
pub use stamp::add_chord;
