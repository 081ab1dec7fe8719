//! Chord tokens and the selection state machine

use serde::{Deserialize, Serialize};

/// A chord label such as `Am` or `F#m7`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordToken(String);

impl ChordToken {
    /// Build a token from picker text. Whitespace is trimmed; blank text is no token.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width in character columns
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for ChordToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Modal state of a binding
///
/// Once a chord is selected the binding never returns to `Idle`; picking
/// another token only replaces the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChordSelection {
    #[default]
    Idle,
    Selected(ChordToken),
}

impl ChordSelection {
    /// Select the token read from `text`. Returns false if `text` is blank, in
    /// which case the state is unchanged.
    pub fn select(&mut self, text: &str) -> bool {
        match ChordToken::parse(text) {
            Some(token) => {
                *self = ChordSelection::Selected(token);
                true
            }
            None => false,
        }
    }

    pub fn token(&self) -> Option<&ChordToken> {
        match self {
            ChordSelection::Idle => None,
            ChordSelection::Selected(token) => Some(token),
        }
    }

    /// Selected label, or the empty string when nothing is selected
    pub fn label(&self) -> &str {
        self.token().map(ChordToken::as_str).unwrap_or("")
    }
}
