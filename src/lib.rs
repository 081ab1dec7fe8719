//! Harmony Mate WASM Module
//!
//! Stamps chord labels above the characters of monospaced song lyrics. A click
//! inside the lyrics `<pre>` is resolved to a line and column, the chord row
//! for that line is found or created, and the chord is written into it.

pub mod error;
pub mod models;
pub mod text;
pub mod geometry;
pub mod editor;
pub mod api;

// Re-export commonly used types
pub use editor::{add_chord, place_chord, ChordSession, ClickOutcome, Placement, RowPolicy};
pub use error::{GeometryError, HarmonyError};
pub use geometry::{ClickPoint, ContainerBox, MonospaceMeasure, TextMeasure};
pub use models::{ChordSelection, ChordToken, Options, RowPolicyKind};
pub use text::{is_lyrics_line, LyricsDocument};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Harmony Mate WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[harmony-mate] logger not installed: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
