//! Scroll-reveal for `.fade-in` sections.

use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const VISIBLE_FRACTION: f64 = 0.15;

/// Observe every `.fade-in` element and add `visible` the first time it
/// scrolls into view. Each element is unobserved after it fires, so the
/// class is applied at most once per element.
///
/// Call once after the page has rendered.
pub fn observe_fade_ins() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_FRACTION));

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {err:?}");
            return;
        }
    };
    callback.forget();

    let Ok(targets) = document.query_selector_all(".fade-in") else {
        return;
    };
    for i in 0..targets.length() {
        if let Some(node) = targets.item(i) {
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }
}
