//! Reflections gallery.

use leptos::prelude::*;

use crate::components::FallbackImg;

struct Reflection {
    image: &'static str,
    /// Fallback encoding tried when the primary fails to load
    alt_image: Option<&'static str>,
    alt: &'static str,
    caption: &'static str,
}

const REFLECTIONS: [Reflection; 3] = [
    Reflection {
        image: "./assets/images/masjid-dusk.webp",
        alt_image: Some("./assets/images/masjid-dusk.jpg"),
        alt: "Masjid silhouette at dusk",
        caption: "Between Maghrib and Isha, the world grows quiet.",
    },
    Reflection {
        image: "./assets/images/mushaf-light.webp",
        alt_image: Some("./assets/images/mushaf-light.jpg"),
        alt: "Open mushaf in morning light",
        caption: "A page a day keeps the heart awake.",
    },
    Reflection {
        image: "./assets/images/lantern.webp",
        alt_image: None,
        alt: "Lantern glowing in the dark",
        caption: "Remembrance is a lamp that never burns out.",
    },
];

#[component]
pub fn ReflectionsSection() -> impl IntoView {
    view! {
        <section id="reflections" class="reflections fade-in">
            <h2>"Reflections"</h2>
            <div class="reflection-grid">
                {REFLECTIONS
                    .iter()
                    .map(|reflection| {
                        view! {
                            <figure class="reflection-card">
                                <FallbackImg
                                    src=reflection.image
                                    alt_src=reflection.alt_image.map(String::from)
                                    alt=reflection.alt
                                />
                                <figcaption>{reflection.caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
