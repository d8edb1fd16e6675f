//! Back-to-top button.

use leptos::prelude::*;

use crate::dom;

const SHOW_AFTER_PX: f64 = 400.0;

/// Floating button that appears after scrolling down and smooth-scrolls
/// back to the top.
#[component]
pub fn ToTopButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    Effect::new(move |_| {
        dom::on_window_event("scroll", move |_| {
            visible.set(dom::scroll_y() > SHOW_AFTER_PX);
        });
    });

    view! {
        <button
            class="to-top"
            class:visible=move || visible.get()
            aria-label="Back to top"
            on:click=move |_| dom::scroll_to_top()
        >
            "↑"
        </button>
    }
}
