use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::audio::{Overlay, StartSequence};
use crate::scene::SceneSettings;

use super::audio::HtmlAudio;

struct HtmlOverlay(HtmlElement);

impl Overlay for HtmlOverlay {
    fn hide(&mut self) {
        if let Err(err) = self.0.style().set_property("display", "none") {
            log::warn!("could not hide overlay: {:?}", err);
        }
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

/// Wire the start button: one click starts both tracks and hides the
/// welcome overlay.
#[wasm_bindgen(js_name = mountStartScreen)]
pub fn mount_start_screen(button_id: &str, overlay_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let button = element_by_id(&document, button_id)?;
    let overlay = Rc::new(RefCell::new(HtmlOverlay(element_by_id(&document, overlay_id)?)));

    let assets = SceneSettings::default().assets;
    let sequence = Rc::new(RefCell::new(StartSequence::new(
        HtmlAudio::new(&assets.ambient_track)?,
        HtmlAudio::new(&assets.voiceover_track)?,
    )));

    let on_click = Closure::<dyn FnMut()>::new(move || {
        sequence.borrow_mut().activate(&mut *overlay.borrow_mut());
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Listener lives as long as the page.
    on_click.forget();
    Ok(())
}
