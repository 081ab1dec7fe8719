//! Text layer
//!
//! Plain line-oriented text with no knowledge of pixels or the DOM.
//!
//! ## Modules
//!
//! - `document`: the lyrics text as an owned line buffer
//! - `classify`: lyrics / chord / blank line predicates
//! - `cursor`: line and column positions

pub mod classify;
pub mod cursor;
pub mod document;

pub use classify::{is_blank_line, is_lyrics_line, LineKind};
pub use cursor::{ColumnSpan, TextPos};
pub use document::LyricsDocument;
