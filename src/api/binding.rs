//! Binding entry points
//!
//! Attaches a chord session to a `<pre>` lyrics element and, optionally, a
//! chord picker container. Each binding owns its own session, so several
//! bindings can live on one page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::helpers::{element_by_id, js_error_message, options_from_js};
use super::measure::HiddenPreMeasure;
use super::picker;
use crate::editor::{ChordSession, ClickOutcome};
use crate::error::HarmonyError;
use crate::geometry::{ClickPoint, ContainerBox};
use crate::models::Options;
use crate::text::LyricsDocument;
use crate::{mate_info, mate_log, mate_warn};

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// A live binding. Dropping it (or calling `free()` from JS) detaches it.
#[wasm_bindgen]
pub struct HarmonyMate {
    session: Rc<RefCell<ChordSession>>,
    lyrics: HtmlElement,
    chords: Option<Element>,
    lyrics_listener: Option<ClickListener>,
    chords_listener: Option<ClickListener>,
}

/// Bind to a `<pre>` element and an optional chord picker element
#[wasm_bindgen(js_name = newMate)]
pub fn new_mate(
    lyrics: Element,
    chords: Option<Element>,
    options: JsValue,
) -> Result<HarmonyMate, JsValue> {
    let options = options_from_js(options)?;
    let lyrics = lyrics
        .dyn_into::<HtmlElement>()
        .map_err(|el| HarmonyError::NotPreElement(el.tag_name().to_lowercase()))?;
    Ok(bind(lyrics, chords, options)?)
}

/// Bind by element ids
#[wasm_bindgen(js_name = mateById)]
pub fn mate_by_id(
    lyrics_id: &str,
    chords_id: Option<String>,
    options: JsValue,
) -> Result<HarmonyMate, JsValue> {
    let options = options_from_js(options)?;
    let lyrics = element_by_id(lyrics_id)?;
    let chords = match chords_id {
        Some(id) => Some(Element::from(element_by_id(&id)?)),
        None => None,
    };
    Ok(bind(lyrics, chords, options)?)
}

pub fn bind(
    lyrics: HtmlElement,
    chords: Option<Element>,
    options: Options,
) -> Result<HarmonyMate, HarmonyError> {
    let tag = lyrics.tag_name();
    if !tag.eq_ignore_ascii_case("pre") {
        return Err(HarmonyError::NotPreElement(tag.to_lowercase()));
    }

    let verbose = options.verbose;
    let mut mate = HarmonyMate {
        session: Rc::new(RefCell::new(ChordSession::new(options))),
        lyrics,
        chords,
        lyrics_listener: None,
        chords_listener: None,
    };
    mate.attach()?;

    if verbose {
        mate_info!(
            "bound to <pre id=\"{}\">{}",
            mate.lyrics.id(),
            if mate.chords.is_some() { " with chord picker" } else { "" }
        );
    }
    Ok(mate)
}

#[wasm_bindgen]
impl HarmonyMate {
    /// Select a chord without going through the picker
    #[wasm_bindgen(js_name = selectChord)]
    pub fn select_chord(&self, chord: &str) -> bool {
        self.session.borrow_mut().select_chord(chord)
    }

    /// Selected chord, empty when none
    #[wasm_bindgen(getter, js_name = selectedChord)]
    pub fn selected_chord(&self) -> String {
        self.session.borrow().selection().label().to_string()
    }

    /// Current lyrics text
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.lyrics.text_content().unwrap_or_default()
    }

    /// Remove the click listeners. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(listener) = self.lyrics_listener.take() {
            let _ = self
                .lyrics
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
        if let (Some(chords), Some(listener)) = (&self.chords, self.chords_listener.take()) {
            let _ = chords
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

impl HarmonyMate {
    fn attach(&mut self) -> Result<(), HarmonyError> {
        let session = Rc::clone(&self.session);
        let lyrics = self.lyrics.clone();
        let listener = ClickListener::new(move |event: MouseEvent| {
            on_lyrics_click(&session.borrow(), &lyrics, &event);
        });
        self.lyrics
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| HarmonyError::Dom(js_error_message(&e)))?;
        self.lyrics_listener = Some(listener);

        if let Some(chords) = &self.chords {
            let session = Rc::clone(&self.session);
            let picker_el = chords.clone();
            let listener = ClickListener::new(move |event: MouseEvent| {
                on_picker_click(&session, &picker_el, &event);
            });
            chords
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                .map_err(|e| HarmonyError::Dom(js_error_message(&e)))?;
            self.chords_listener = Some(listener);
        }
        Ok(())
    }
}

impl Drop for HarmonyMate {
    fn drop(&mut self) {
        self.detach();
    }
}

fn on_picker_click(session: &RefCell<ChordSession>, picker_el: &Element, event: &MouseEvent) {
    let (chord_class, selected_class) = {
        let session = session.borrow();
        let options = session.options();
        (options.chord_class.clone(), options.selected_chord_class.clone())
    };

    let Some(token) = picker::chord_token_target(event, &chord_class) else {
        return;
    };
    let text = token.text_content().unwrap_or_default();
    if !session.borrow_mut().select_chord(&text) {
        return;
    }

    if let Err(e) = picker::mark_selected(picker_el, &token, &selected_class) {
        mate_warn!("could not mark selected chord: {}", js_error_message(&e));
    }
}

fn on_lyrics_click(session: &ChordSession, lyrics: &HtmlElement, event: &MouseEvent) {
    let verbose = session.options().verbose;
    if session.selection().token().is_none() {
        if verbose {
            mate_log!("no chord selected");
        }
        return;
    }

    let measure = match HiddenPreMeasure::for_element(lyrics) {
        Ok(measure) => measure,
        Err(e) => {
            mate_warn!("click ignored: {}", e);
            return;
        }
    };

    let mut doc = LyricsDocument::from_text(&lyrics.text_content().unwrap_or_default());
    let rect = lyrics.get_bounding_client_rect();
    let container = ContainerBox::new(rect.x(), rect.y(), rect.width(), rect.height());
    let click = ClickPoint::new(f64::from(event.client_x()), f64::from(event.client_y()));

    match session.click(&mut doc, click, &container, &measure) {
        Ok(ClickOutcome::Placed { placement, .. }) => {
            lyrics.set_text_content(Some(&doc.to_text()));
            log::debug!(
                "placed {} on row {}{}",
                session.selection().label(),
                placement.row,
                if placement.inserted { " (new)" } else { "" }
            );
        }
        Ok(ClickOutcome::Ignored(_)) => {}
        Err(e) => mate_warn!("click ignored: {}", e),
    }
}
