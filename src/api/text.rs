//! Pure text functions exported to JavaScript
//!
//! For hosts that do their own hit testing and only want the line editing.

use wasm_bindgen::prelude::*;

use crate::editor::{add_chord, place_chord};
use crate::text::{is_lyrics_line, LyricsDocument};

/// Stamp `chord` into `line` at column `col`
#[wasm_bindgen(js_name = addChord)]
pub fn add_chord_js(line: &str, col: usize, chord: &str) -> String {
    add_chord(line, col, chord)
}

#[wasm_bindgen(js_name = isLyricsLine)]
pub fn is_lyrics_line_js(line: &str) -> bool {
    is_lyrics_line(line)
}

/// Place `chord` above lyrics line `line` of `text` and return the new text.
///
/// Text is returned unchanged when the line is not a lyrics line.
#[wasm_bindgen(js_name = placeChordInText)]
pub fn place_chord_in_text(text: &str, line: usize, col: usize, chord: &str) -> String {
    let mut doc = LyricsDocument::from_text(text);
    match place_chord(doc.lines_mut(), line, col, chord) {
        Some(_) => doc.to_text(),
        None => text.to_string(),
    }
}
