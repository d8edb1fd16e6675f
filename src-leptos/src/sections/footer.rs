//! Footer: daily-amal widgets and the small print.

use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::components::{PrayerTimesWidget, TasbeehCounter};
use crate::config::SiteConfig;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = Local::now().year();

    view! {
        <footer class="site-footer fade-in">
            <div class="footer-widgets">
                <TasbeehCounter />
                <PrayerTimesWidget geolocation_timeout_ms=config.geolocation_timeout_ms />
            </div>
            <p class="copyright">"© " {year} " NoorVerse. Light upon light."</p>
        </footer>
    }
}
