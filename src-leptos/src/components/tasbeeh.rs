//! Tasbeeh counter widget.

use leptos::prelude::*;
use noorverse_types::Tasbeeh;

use crate::storage;

const TASBEEH_KEY: &str = "tasbeeh";

/// Persistent dhikr counter. Every tap writes straight back to storage.
#[component]
pub fn TasbeehCounter() -> impl IntoView {
    let counter = RwSignal::new(
        storage::read(TASBEEH_KEY)
            .map(|raw| Tasbeeh::from_stored(&raw))
            .unwrap_or_default(),
    );

    let on_increment = move |_| {
        counter.update(|c| c.increment());
        storage::write(TASBEEH_KEY, &counter.get_untracked().to_stored());
    };

    let on_reset = move |_| {
        counter.update(|c| c.reset());
        storage::write(TASBEEH_KEY, "0");
    };

    view! {
        <div class="tasbeeh">
            <h3>"Tasbeeh Counter"</h3>
            <output class="tasbeeh-count">{move || counter.get().count()}</output>
            <div class="tasbeeh-controls">
                <button class="btn btn--primary" on:click=on_increment>
                    "SubhanAllah +1"
                </button>
                <button class="btn btn--ghost" on:click=on_reset>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
