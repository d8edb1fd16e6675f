//! Hero: starfield, headline, and the rotating ayah.

use leptos::prelude::*;

use crate::components::{AyahRotator, ParticlesCanvas};
use crate::config::SiteConfig;

#[component]
pub fn HeroSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section id="home" class="hero">
            <ParticlesCanvas />
            <div class="hero-inner fade-in">
                <h1>"NoorVerse"</h1>
                <p class="tagline">
                    "Light upon light: reflections, recitation, and remembrance."
                </p>
                <AyahRotator interval_ms=config.ayah_interval_ms />
            </div>
        </section>
    }
}
