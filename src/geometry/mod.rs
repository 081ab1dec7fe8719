//! Geometry resolver
//!
//! Maps a click inside the lyrics container to a (line, column) position.

pub mod measure;
pub mod resolver;

pub use measure::{MonospaceMeasure, TextMeasure};
pub use resolver::{
    resolve, resolve_column, resolve_line, ClickPoint, ColumnHit, ContainerBox, LineHit,
};
