//! Chord picker marking
//!
//! Only one token in the picker carries the selected class at a time.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// The chord token an event was dispatched on, if any
pub fn chord_token_target(event: &Event, chord_class: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()
        .filter(|el| el.class_list().contains(chord_class))
}

/// Remove `class` from `element` and all its descendants, depth first
pub fn clear_marker(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)?;

    let children = element.children();
    for idx in 0..children.length() {
        if let Some(child) = children.item(idx) {
            clear_marker(&child, class)?;
        }
    }
    Ok(())
}

/// Move the selected marker inside `picker` to `token`
pub fn mark_selected(picker: &Element, token: &Element, class: &str) -> Result<(), JsValue> {
    clear_marker(picker, class)?;
    token.class_list().add_1(class)
}
