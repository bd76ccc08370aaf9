//! Browser-only checks. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use drape_engine::ClothDemo;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn frame_invokes_render_callback() {
    let mut demo = ClothDemo::new().unwrap();
    let render = js_sys::Function::new_with_args(
        "dirty, x, y, z, color",
        "globalThis.__lastColor = color; globalThis.__lastDirty = dirty;",
    );
    demo.frame(&render, None);

    let global = js_sys::global();
    let color = js_sys::Reflect::get(&global, &JsValue::from_str("__lastColor")).unwrap();
    let dirty = js_sys::Reflect::get(&global, &JsValue::from_str("__lastDirty")).unwrap();
    assert_eq!(color.as_f64(), Some(0xff69b4 as f64));
    assert_eq!(dirty.as_bool(), Some(true));
    assert_eq!(demo.frame_count(), 1);
}

#[wasm_bindgen_test]
fn throwing_renderer_does_not_stop_the_loop() {
    let mut demo = ClothDemo::new().unwrap();
    let render = js_sys::Function::new_no_args("throw new Error('boom');");
    demo.frame(&render, None);
    demo.frame(&render, None);
    assert_eq!(demo.frame_count(), 2);
}

#[wasm_bindgen_test]
fn mesh_layout_points_into_memory() {
    let demo = ClothDemo::new().unwrap();
    let layout = demo.mesh_layout();
    assert_eq!(layout.positions_len_elements(), 169 * 3);
    assert_eq!(layout.indices_len_elements(), 12 * 12 * 6);
    assert_ne!(layout.positions_ptr(), 0);
}

#[wasm_bindgen_test]
fn bad_config_throws() {
    assert!(ClothDemo::from_config_json(r#"{"nx": 0}"#).is_err());
}
