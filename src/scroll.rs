use leptos::*;
use wasm_bindgen::prelude::*;

use crate::config::SCROLL_KEY;
use crate::console;

/// Current vertical scroll offset in px, 0 outside a browser.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Call `on_scroll` with the page offset now and on every scroll event
/// until the current reactive owner is disposed.
pub fn watch_scroll_offset(on_scroll: impl Fn(f64) + 'static) {
    on_scroll(scroll_offset());
    let handle = window_event_listener(ev::scroll, move |_| on_scroll(scroll_offset()));
    on_cleanup(move || handle.remove());
}

/// Scroll the element with this id into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(section) = document().get_element_by_id(id) else {
        console::debug(&format!("section #{id} not found, not scrolling"));
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Set up scroll restoration - call this once on app init
pub fn setup_scroll_restoration() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
    }

    // Save scroll position before unload
    let closure = Closure::wrap(Box::new(move || {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.set_item(SCROLL_KEY, &scroll_offset().to_string());
        }
    }) as Box<dyn Fn()>);

    let _ = window
        .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Restore the saved scroll position, unless the URL targets a section.
pub fn restore_scroll_position() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let has_hash = window.location().hash().map(|h| !h.is_empty()).unwrap_or(false);
    if has_hash {
        return;
    }
    let saved = window
        .session_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(SCROLL_KEY).ok().flatten())
        .and_then(|value| value.parse::<f64>().ok());
    if let Some(scroll_y) = saved {
        window.scroll_to_with_x_and_y(0.0, scroll_y);
    }
}

/// Restore scroll position after a delay (in ms)
pub fn restore_scroll_after_delay(delay_ms: u64) {
    set_timeout(restore_scroll_position, std::time::Duration::from_millis(delay_ms));
}
