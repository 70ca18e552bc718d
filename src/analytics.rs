use wasm_bindgen::prelude::*;

/// Event sent when a visitor clicks the admission call-to-action.
pub const CTA_EVENT: &str = "cta-admission";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Track a custom event in Umami analytics
/// Fails silently if Umami is not loaded (e.g., blocked by adblocker)
pub fn track_event(event: &str) {
    let loaded = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("umami"))
        .unwrap_or(false);
    if loaded {
        umami_track(event);
    }
}
