use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::audio::Playback;
use crate::core::DrapeError;

/// `Playback` over an `<audio>` element.
pub struct HtmlAudio {
    element: HtmlAudioElement,
    src: String,
}

impl HtmlAudio {
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        Ok(Self { element, src: src.to_string() })
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl Playback for HtmlAudio {
    fn set_looping(&mut self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn play(&mut self) -> Result<(), DrapeError> {
        let promise = self
            .element
            .play()
            .map_err(|e| DrapeError::Playback(describe(&e)))?;
        let src = self.src.clone();
        // Autoplay rejections arrive later through the promise.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::error!("{} ({})", DrapeError::Playback(describe(&err)), src);
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(err) = self.element.pause() {
            log::warn!("pause failed for {}: {}", self.src, describe(&err));
        }
    }

    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }
}
