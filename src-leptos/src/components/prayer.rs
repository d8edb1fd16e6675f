//! Prayer times for the visitor's location.

use leptos::prelude::*;
use leptos::task::spawn_local;
use noorverse_types::{PrayerTimesError, PrayerTimings};

use crate::{api, geo};

const BLOCKED_TEXT: &str = "Location blocked. Unable to load prayer times.";

#[derive(Clone, PartialEq)]
enum PrayerState {
    Loading,
    Ready(PrayerTimings),
    Unavailable,
}

/// Asks for the visitor's position once, then renders the five daily
/// timings. Denied or failed lookups show the blocked line; a browser
/// without geolocation gets nothing at all.
#[component]
pub fn PrayerTimesWidget(geolocation_timeout_ms: u32) -> impl IntoView {
    let state = RwSignal::new(PrayerState::Loading);

    // One attempt per page load, no retry.
    Effect::new(move |_| {
        spawn_local(async move {
            match load_timings(geolocation_timeout_ms).await {
                Ok(timings) => state.set(PrayerState::Ready(timings)),
                Err(PrayerTimesError::Unsupported) => {
                    log::warn!("geolocation unsupported, leaving prayer times empty");
                }
                Err(err) => {
                    log::warn!("prayer times unavailable: {err}");
                    state.set(PrayerState::Unavailable);
                }
            }
        });
    });

    view! {
        <div class="prayer-times">
            <h3>"Prayer Times"</h3>
            {move || match state.get() {
                PrayerState::Loading => view! { <div class="prayer-grid"></div> }.into_any(),
                PrayerState::Ready(timings) => {
                    let rows = timings
                        .rows()
                        .into_iter()
                        .map(|(label, time)| {
                            view! {
                                <div>
                                    <strong>{label}":"</strong>
                                    " "
                                    {time}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! { <div class="prayer-grid">{rows}</div> }.into_any()
                }
                PrayerState::Unavailable => {
                    view! { <p class="prayer-unavailable">{BLOCKED_TEXT}</p> }.into_any()
                }
            }}
        </div>
    }
}

async fn load_timings(timeout_ms: u32) -> Result<PrayerTimings, PrayerTimesError> {
    let coords = geo::current_position(timeout_ms).await?;
    api::aladhan::fetch_timings(coords).await
}
