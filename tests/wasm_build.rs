//! Browser tests
//!
//! Binds to real DOM elements and dispatches clicks. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use harmony_mate_wasm::api::{mate_by_id, new_mate, picker};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append(tag: &str, id: &str, html: &str) -> HtmlElement {
    let el = document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    el.set_id(id);
    el.set_inner_html(html);
    document().body().unwrap().append_child(&el).unwrap();
    el
}

fn click(target: &Element, x: f64, y: f64) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x as i32);
    init.set_client_y(y as i32);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_refuses_non_pre_element() {
    let div = append("div", "not-pre", "Hello world");
    let result = new_mate(div.clone().into(), None, JsValue::UNDEFINED);
    assert!(result.is_err());
    div.remove();
}

#[wasm_bindgen_test]
fn test_missing_id_is_error() {
    assert!(mate_by_id("no-such-lyrics", None, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_picker_selects_and_marks() {
    let lyrics = append("pre", "lyrics-picker", "Hello world");
    let chords = append(
        "div",
        "chords-picker",
        r#"<span class="chord">C</span><div><span class="chord is-selected">G</span></div>"#,
    );
    let mate = mate_by_id("lyrics-picker", Some("chords-picker".to_string()), JsValue::UNDEFINED)
        .unwrap();
    assert_eq!(mate.selected_chord(), "");

    let first = chords.query_selector(".chord").unwrap().unwrap();
    click(&first, 0.0, 0.0);

    assert_eq!(mate.selected_chord(), "C");
    assert_eq!(chords.query_selector_all(".is-selected").unwrap().length(), 1);
    assert!(first.class_list().contains("is-selected"));

    drop(mate);
    lyrics.remove();
    chords.remove();
}

#[wasm_bindgen_test]
fn test_clear_marker_is_deep() {
    let root = append(
        "div",
        "marker-root",
        r#"<p class="x"><b class="x"><i class="x"></i></b></p>"#,
    );
    root.class_list().add_1("x").unwrap();

    picker::clear_marker(&root, "x").unwrap();
    assert_eq!(root.query_selector_all(".x").unwrap().length(), 0);
    assert!(!root.class_list().contains("x"));
    root.remove();
}

#[wasm_bindgen_test]
fn test_lyrics_click_stamps_chord() {
    let lyrics = append("pre", "lyrics-click", "Hello world");
    lyrics.style().set_property("font-family", "monospace").unwrap();
    lyrics.style().set_property("margin", "0").unwrap();
    let mate = new_mate(lyrics.clone().into(), None, JsValue::UNDEFINED).unwrap();

    // Nothing selected yet
    let rect = lyrics.get_bounding_client_rect();
    click(&lyrics, rect.x() + 1.0, rect.y() + 1.0);
    assert_eq!(mate.text(), "Hello world");

    assert!(mate.select_chord("Am"));
    click(&lyrics, rect.x() + 1.0, rect.y() + 1.0);
    assert_eq!(mate.text(), "Am\nHello world");

    drop(mate);
    lyrics.remove();
}

#[wasm_bindgen_test]
fn test_detached_binding_ignores_clicks() {
    let lyrics = append("pre", "lyrics-detach", "Hello world");
    let mut mate = new_mate(lyrics.clone().into(), None, JsValue::UNDEFINED).unwrap();
    mate.select_chord("D");
    mate.detach();

    let rect = lyrics.get_bounding_client_rect();
    click(&lyrics, rect.x() + 1.0, rect.y() + 1.0);
    assert_eq!(lyrics.text_content().unwrap(), "Hello world");
    lyrics.remove();
}
