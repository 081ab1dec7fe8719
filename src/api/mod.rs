//! Harmony Mate WASM API
//!
//! The JavaScript-facing side of the crate: binding a `<pre>` element and a
//! chord picker, measuring text in the DOM, and the pure text helpers.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, options parsing, DOM lookups
//! - `binding`: `newMate` / `mateById` and the `HarmonyMate` handle
//! - `measure`: hidden `<pre>` text measurement
//! - `picker`: selected-chord marking in the picker
//! - `text`: `addChord`, `isLyricsLine`, `placeChordInText`

pub mod helpers;
pub mod binding;
pub mod measure;
pub mod picker;
pub mod text;

pub use binding::{mate_by_id, new_mate, HarmonyMate};
pub use text::{add_chord_js, is_lyrics_line_js, place_chord_in_text};
