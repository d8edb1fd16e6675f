//! Window-level DOM helpers.
//!
//! Leptos owns the subtrees it renders; the few places that need the window
//! itself (scroll position, viewport width, page-lifetime listeners) go
//! through here. Attached listeners are leaked on purpose: they live as
//! long as the page does.

use wasm_bindgen::prelude::*;
use web_sys::Event;

/// Attach a listener to the window for the life of the page.
pub fn on_window_event(event_type: &str, handler: impl FnMut(Event) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if window
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach window '{event_type}' listener");
    }
    closure.forget();
}

/// Vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport width in pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
