//! Browser text measurement
//!
//! Renders the string into a hidden `<pre>` that copies the lyrics element's
//! computed font, reads its width and removes it again.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::helpers::{self, js_error_message};
use crate::error::{GeometryError, HarmonyError};
use crate::geometry::TextMeasure;

/// Computed style properties copied onto the probe element
const FONT_PROPERTIES: &[&str] = &[
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "font-variant",
    "letter-spacing",
    "tab-size",
];

pub struct HiddenPreMeasure {
    document: Document,
    font: Vec<(&'static str, String)>,
}

impl HiddenPreMeasure {
    /// Capture the font of `lyrics` as currently rendered
    pub fn for_element(lyrics: &HtmlElement) -> Result<Self, HarmonyError> {
        let window = web_sys::window().ok_or_else(|| HarmonyError::Dom("no window".to_string()))?;
        let computed = window
            .get_computed_style(lyrics)
            .map_err(|e| HarmonyError::Dom(js_error_message(&e)))?;

        let font = match computed {
            Some(style) => FONT_PROPERTIES
                .iter()
                .filter_map(|&name| {
                    let value = style.get_property_value(name).ok()?;
                    (!value.is_empty()).then_some((name, value))
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            document: helpers::document()?,
            font,
        })
    }

    fn probe(&self, text: &str) -> Result<f64, JsValue> {
        let pre = self
            .document
            .create_element("pre")?
            .dyn_into::<HtmlElement>()?;

        let style = pre.style();
        style.set_property("position", "absolute")?;
        style.set_property("float", "left")?;
        // `pre` keeps runs of spaces, which `nowrap` would collapse
        style.set_property("white-space", "pre")?;
        style.set_property("visibility", "hidden")?;
        style.set_property("margin", "0")?;
        style.set_property("padding", "0")?;
        style.set_property("border", "0")?;
        for (name, value) in &self.font {
            style.set_property(name, value)?;
        }
        pre.set_text_content(Some(text));

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&pre)?;
        let width = pre.get_bounding_client_rect().width();
        body.remove_child(&pre)?;

        Ok(width)
    }
}

impl TextMeasure for HiddenPreMeasure {
    fn measure_width(&self, text: &str) -> Result<f64, GeometryError> {
        self.probe(text)
            .map_err(|e| GeometryError::Measurement(js_error_message(&e)))
    }
}
