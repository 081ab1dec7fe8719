//! Error types for chord placement
//!
//! Binding errors are fatal and surface to JavaScript as thrown `Error`s.
//! Geometry errors never escape a click handler: the binding logs them and
//! leaves the lyrics untouched.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarmonyError {
    /// The lyrics target is not a `<pre>` element
    #[error("Harmony mate must be bound to a <pre> element, got <{0}>")]
    NotPreElement(String),

    /// No element carries the requested id
    #[error("No element with id '{0}'")]
    ElementNotFound(String),

    /// The options object could not be read
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Degenerate click geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("document has no lines")]
    EmptyDocument,

    /// Container height or width is zero, negative or not finite
    #[error("container has no usable size ({width}x{height})")]
    DegenerateContainer { width: f64, height: f64 },

    #[error("click coordinates are not finite")]
    NonFiniteClick,

    /// Click lands above or left of the container's top-left corner
    #[error("click ({x}, {y}) is outside the container")]
    OutsideContainer { x: f64, y: f64 },

    /// Measured width cannot be split into character cells
    #[error("measured width {width} is unusable for a {chars}-character line")]
    DegenerateWidth { width: f64, chars: usize },

    /// The text-measurement collaborator failed
    #[error("text measurement failed: {0}")]
    Measurement(String),
}

impl From<HarmonyError> for JsValue {
    fn from(err: HarmonyError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T, E = HarmonyError> = std::result::Result<T, E>;
