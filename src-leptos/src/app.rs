//! Main App component

use leptos::prelude::*;
use noorverse_types::Transport;

use crate::components::ToTopButton;
use crate::config::SiteConfig;
use crate::sections::{ContactSection, HeroSection, ReflectionsSection, SiteFooter, SiteHeader};
use crate::{api, reveal};

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::default();

    // Bind the EmailJS SDK up front when it is the configured transport
    if let Some(Transport::EmailJs(emailjs)) = &config.transport {
        api::emailjs::init(emailjs);
    }
    provide_context(config);

    // Wire scroll-reveal once the sections exist in the DOM
    Effect::new(move |_| {
        reveal::observe_fade_ins();
    });

    view! {
        <SiteHeader />
        <main>
            <HeroSection />
            <ReflectionsSection />
            <ContactSection />
        </main>
        <SiteFooter />
        <ToTopButton />
    }
}
