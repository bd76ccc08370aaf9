use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::simulation::{ClothDemo, JsRenderer};

fn window_size(window: &Window) -> (f32, f32) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (width as f32, height as f32)
}

/// Hand the demo to the browser: one frame per `requestAnimationFrame`,
/// and the viewport follows window resizes. `on_resize` is called as
/// `(aspect, width, height)` so the page can update its camera.
#[wasm_bindgen(js_name = runDemo)]
pub fn run_demo(
    demo: ClothDemo,
    render: Function,
    controls: Option<Function>,
    on_resize: Option<Function>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let demo = Rc::new(RefCell::new(demo));

    let (width, height) = window_size(&window);
    demo.borrow_mut().resize(width, height);

    let resize_demo = demo.clone();
    let resize_window = window.clone();
    let on_window_resize = Closure::<dyn FnMut()>::new(move || {
        let (width, height) = window_size(&resize_window);
        let aspect = resize_demo.borrow_mut().resize(width, height);
        if let Some(callback) = &on_resize {
            let result = callback.call3(
                &JsValue::NULL,
                &JsValue::from(aspect),
                &JsValue::from(width),
                &JsValue::from(height),
            );
            if let Err(err) = result {
                log::error!("resize callback failed: {:?}", err);
            }
        }
    });
    window.add_event_listener_with_callback("resize", on_window_resize.as_ref().unchecked_ref())?;
    on_window_resize.forget();

    // The closure re-schedules itself through this slot.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = tick.clone();
    let loop_window = window.clone();

    *first.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        {
            let mut renderer = JsRenderer::new(&render, controls.as_ref());
            demo.borrow_mut().core_mut().frame(&mut renderer);
        }
        if let Some(next) = tick.borrow().as_ref() {
            if let Err(err) = loop_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }));

    if let Some(start) = first.borrow().as_ref() {
        window.request_animation_frame(start.as_ref().unchecked_ref())?;
    }
    log::info!("cloth demo loop scheduled");
    Ok(())
}
