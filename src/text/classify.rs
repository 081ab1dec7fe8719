//! Line classification
//!
//! A lyrics line holds at least one run of three or more word characters.
//! Anything else is a chord row or a blank line. Note that chord names with
//! three word characters (`Am7`, `Cmaj7`) make a row read as lyrics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LYRICS_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w{3,}").expect("valid lyrics pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Lyrics,
    Chords,
    Blank,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if is_lyrics_line(line) {
            LineKind::Lyrics
        } else if is_blank_line(line) {
            LineKind::Blank
        } else {
            LineKind::Chords
        }
    }
}

pub fn is_lyrics_line(line: &str) -> bool {
    LYRICS_RUN.is_match(line)
}

/// Only whitespace (or nothing at all)
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lyrics_needs_three_word_chars() {
        assert!(is_lyrics_line("Hello world"));
        assert!(is_lyrics_line("  la la lalala"));
        assert!(!is_lyrics_line("la la la"));
        assert!(!is_lyrics_line("Am   G   F#m"));
        assert!(!is_lyrics_line(""));
    }

    #[test]
    fn test_non_ascii_words_count() {
        assert!(is_lyrics_line("Ça ira, ça ira"));
        assert!(is_lyrics_line("über"));
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(LineKind::of("Hello world"), LineKind::Lyrics);
        assert_eq!(LineKind::of("   "), LineKind::Blank);
        assert_eq!(LineKind::of(""), LineKind::Blank);
        assert_eq!(LineKind::of("C    G"), LineKind::Chords);
        assert_eq!(LineKind::of("Am7"), LineKind::Lyrics);
    }
}
