//! Shared helpers for the WASM API
//!
//! Console logging macros, options deserialization and DOM lookups used by
//! the binding entry points.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::HarmonyError;
use crate::models::Options;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [harmony-mate] prefix
#[macro_export]
macro_rules! mate_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [harmony-mate] prefix
#[macro_export]
macro_rules! mate_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning with [harmony-mate] ⚠️ prefix
#[macro_export]
macro_rules! mate_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error with [harmony-mate] ❌ prefix
#[macro_export]
macro_rules! mate_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[harmony-mate] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[harmony-mate] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[harmony-mate] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[harmony-mate] ❌ {}", msg));
}

// ============================================================================
// Options
// ============================================================================

/// Read binding options from JavaScript. `undefined` and `null` give defaults.
pub fn options_from_js(value: JsValue) -> Result<Options, HarmonyError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = HarmonyError::InvalidOptions(e.to_string());
        log_error(&err.to_string());
        err
    })
}

// ============================================================================
// DOM Lookups
// ============================================================================

pub fn document() -> Result<Document, HarmonyError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| HarmonyError::Dom("no window document".to_string()))
}

/// Find an element by id and require it to be an HTML element
pub fn element_by_id(id: &str) -> Result<HtmlElement, HarmonyError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| HarmonyError::ElementNotFound(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|el| HarmonyError::Dom(format!("<{}> is not an HTML element", el.tag_name())))
}

/// Readable message for a failed JS call
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
