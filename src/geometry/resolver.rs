//! Pixel to text position resolution
//!
//! Assumes every line occupies the same height and every character the same
//! advance. The line index comes from the container height alone; the column
//! comes from the measured width of one line divided by its character count.

use serde::{Deserialize, Serialize};

use super::measure::TextMeasure;
use crate::error::GeometryError;
use crate::text::TextPos;

/// Viewport coordinates of a click
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
}

impl ClickPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the lyrics element in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Offset of `click` from the top-left corner
    pub fn relative(&self, click: ClickPoint) -> Result<(f64, f64), GeometryError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.width)
            || !usable(self.height)
            || !self.x.is_finite()
            || !self.y.is_finite()
        {
            return Err(GeometryError::DegenerateContainer {
                width: self.width,
                height: self.height,
            });
        }
        if !click.x.is_finite() || !click.y.is_finite() {
            return Err(GeometryError::NonFiniteClick);
        }

        let (rel_x, rel_y) = (click.x - self.x, click.y - self.y);
        if rel_x < 0.0 || rel_y < 0.0 {
            return Err(GeometryError::OutsideContainer { x: rel_x, y: rel_y });
        }
        Ok((rel_x, rel_y))
    }
}

/// Vertical half of a resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHit {
    pub line: usize,
    pub relative_y: f64,
    pub line_height: f64,
}

/// Horizontal half of a resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnHit {
    pub col: usize,
    pub relative_x: f64,
    /// Measured width of the line the column was computed on
    pub line_width: f64,
    /// Zero for an empty line
    pub char_width: f64,
}

/// Find the line under the click.
///
/// A click on or below the bottom edge resolves to the last line.
pub fn resolve_line(
    click: ClickPoint,
    container: &ContainerBox,
    line_count: usize,
) -> Result<LineHit, GeometryError> {
    if line_count == 0 {
        return Err(GeometryError::EmptyDocument);
    }
    let (_, relative_y) = container.relative(click)?;

    let line_height = container.height / line_count as f64;
    let line = ((relative_y / line_height).floor() as usize).min(line_count - 1);

    Ok(LineHit {
        line,
        relative_y,
        line_height,
    })
}

/// Find the column under the click, measured against `line`.
///
/// The column may lie past the end of the line; the editor pads for it.
pub fn resolve_column<M: TextMeasure + ?Sized>(
    click: ClickPoint,
    container: &ContainerBox,
    line: &str,
    measure: &M,
) -> Result<ColumnHit, GeometryError> {
    let (relative_x, _) = container.relative(click)?;

    let chars = line.chars().count();
    if chars == 0 {
        return Ok(ColumnHit {
            col: 0,
            relative_x,
            line_width: 0.0,
            char_width: 0.0,
        });
    }

    let line_width = measure.measure_width(line)?;
    if !line_width.is_finite() || line_width <= 0.0 {
        return Err(GeometryError::DegenerateWidth {
            width: line_width,
            chars,
        });
    }

    let char_width = line_width / chars as f64;
    Ok(ColumnHit {
        col: (relative_x / char_width).floor() as usize,
        relative_x,
        line_width,
        char_width,
    })
}

/// Resolve a click to a position, measuring the clicked line itself
pub fn resolve<M: TextMeasure + ?Sized>(
    click: ClickPoint,
    container: &ContainerBox,
    lines: &[String],
    measure: &M,
) -> Result<TextPos, GeometryError> {
    let line_hit = resolve_line(click, container, lines.len())?;
    let column_hit = resolve_column(click, container, &lines[line_hit.line], measure)?;
    Ok(TextPos::new(line_hit.line, column_hit.col))
}
