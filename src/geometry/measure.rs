//! Text measurement
//!
//! The resolver only needs the rendered pixel width of a string in the lyrics
//! font. In the browser that comes from the DOM (`api::measure`); natively a
//! fixed per-character advance stands in for it.

use crate::error::GeometryError;

pub trait TextMeasure {
    /// Rendered width of `text` in pixels
    fn measure_width(&self, text: &str) -> Result<f64, GeometryError>;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_width(&self, text: &str) -> Result<f64, GeometryError> {
        (**self).measure_width(text)
    }
}

/// Every character advances by the same number of pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f64,
}

impl MonospaceMeasure {
    pub fn new(char_width: f64) -> Self {
        Self { char_width }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_width(&self, text: &str) -> Result<f64, GeometryError> {
        Ok(text.chars().count() as f64 * self.char_width)
    }
}
