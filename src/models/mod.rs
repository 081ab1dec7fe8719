//! Session-level models: options and chord selection

pub mod chord;
pub mod options;

pub use chord::{ChordSelection, ChordToken};
pub use options::{Options, RowPolicyKind};
