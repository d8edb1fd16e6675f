//! Site header: brand, navigation, and the global toggles.

use leptos::prelude::*;
use noorverse_types::Theme;

use crate::components::AudioControls;
use crate::{dom, theme};

const ELEVATE_AFTER_PX: f64 = 10.0;
const DESKTOP_BREAKPOINT_PX: f64 = 860.0;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#home", "Home"),
    ("#reflections", "Reflections"),
    ("#contact", "Contact"),
];

/// Header with the mobile menu, theme toggle, and audio controls. Picks up
/// a drop shadow once the page scrolls.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let elevated = RwSignal::new(false);

    // Apply a previously chosen theme before first paint settles.
    let theme_pref = RwSignal::new(theme::stored());
    if let Some(initial) = theme_pref.get_untracked() {
        theme::apply(initial);
    }

    let on_theme_toggle = move |_| {
        let next = Theme::toggled_from(theme_pref.get_untracked());
        theme::apply(next);
        theme::persist(next);
        theme_pref.set(Some(next));
    };

    Effect::new(move |_| {
        dom::on_window_event("scroll", move |_| {
            elevated.set(dom::scroll_y() > ELEVATE_AFTER_PX);
        });
        // Widening past the breakpoint closes a left-open mobile menu.
        dom::on_window_event("resize", move |_| {
            if dom::viewport_width() >= DESKTOP_BREAKPOINT_PX && menu_open.get_untracked() {
                menu_open.set(false);
            }
        });
    });

    let dark = move || matches!(theme_pref.get(), Some(Theme::Dark));

    view! {
        <header
            class="site-header"
            style:box-shadow=move || {
                if elevated.get() { "0 6px 20px rgba(0,0,0,.25)" } else { "none" }
            }
        >
            <a class="brand" href="#home">
                "NoorVerse"
            </a>
            <button
                class="menu-toggle"
                aria-controls="primary-nav"
                aria-expanded=move || menu_open.get().to_string()
                aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav id="primary-nav" class="primary-nav" class:open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href on:click=move |_| menu_open.set(false)>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="header-controls">
                <AudioControls />
                <button
                    class="icon-button mode-toggle"
                    aria-label="Toggle dark mode"
                    aria-pressed=move || dark().to_string()
                    on:click=on_theme_toggle
                >
                    {move || if dark() { "☀️" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}
