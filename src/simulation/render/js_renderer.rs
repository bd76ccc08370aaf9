use js_sys::Function;
use wasm_bindgen::JsValue;

use super::render_extract::{FrameView, Renderer};

/// Renderer backed by page callbacks.
///
/// `render` is called as `render(meshDirty, sphereX, sphereY, sphereZ,
/// sphereColor)`; the page reads the vertex buffers through the mesh layout
/// pointers. Callback exceptions are logged, never propagated.
pub struct JsRenderer<'a> {
    render: &'a Function,
    controls: Option<&'a Function>,
}

impl<'a> JsRenderer<'a> {
    pub fn new(render: &'a Function, controls: Option<&'a Function>) -> Self {
        Self { render, controls }
    }
}

impl Renderer for JsRenderer<'_> {
    fn update_controls(&mut self) {
        if let Some(controls) = self.controls {
            if let Err(err) = controls.call0(&JsValue::NULL) {
                log::error!("controls update failed: {:?}", err);
            }
        }
    }

    fn render(&mut self, view: &FrameView<'_>) {
        let args = js_sys::Array::of5(
            &JsValue::from_bool(view.mesh_dirty),
            &JsValue::from_f64(view.sphere_position.x as f64),
            &JsValue::from_f64(view.sphere_position.y as f64),
            &JsValue::from_f64(view.sphere_position.z as f64),
            &JsValue::from_f64(view.sphere_tint.color() as f64),
        );
        if let Err(err) = self.render.apply(&JsValue::NULL, &args) {
            log::error!("render callback failed: {:?}", err);
        }
    }
}
