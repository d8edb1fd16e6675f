//! Rotating featured ayah.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

struct Ayah {
    arabic: &'static str,
    english: &'static str,
}

const FEATURED_AYAT: [Ayah; 6] = [
    Ayah {
        arabic: "إِنَّ مَعَ الْعُسْرِ يُسْرًا",
        english: "Indeed, with hardship will be ease. — 94:6",
    },
    Ayah {
        arabic: "اللَّهُ نُورُ السَّمَاوَاتِ وَالْأَرْضِ",
        english: "Allah is the Light of the heavens and the earth. — 24:35",
    },
    Ayah {
        arabic: "فَاذْكُرُونِي أَذْكُرْكُمْ",
        english: "So remember Me; I will remember you. — 2:152",
    },
    Ayah {
        arabic: "أَلَا بِذِكْرِ اللَّهِ تَطْمَئِنُّ الْقُلُوبُ",
        english: "Verily, in the remembrance of Allah do hearts find rest. — 13:28",
    },
    Ayah {
        arabic: "ادْعُونِي أَسْتَجِبْ لَكُمْ",
        english: "Call upon Me; I will respond to you. — 40:60",
    },
    Ayah {
        arabic: "وَرَحْمَتِي وَسِعَتْ كُلَّ شَيْءٍ",
        english: "My mercy encompasses all things. — 7:156",
    },
];

fn next_index(index: usize) -> usize {
    (index + 1) % FEATURED_AYAT.len()
}

/// Shows one ayah with its translation and advances on a fixed interval,
/// wrapping at the end of the list.
#[component]
pub fn AyahRotator(interval_ms: u32) -> impl IntoView {
    let index = RwSignal::new(0usize);

    Effect::new(move |_| {
        Interval::new(interval_ms, move || {
            index.update(|i| *i = next_index(*i));
        })
        .forget();
    });

    view! {
        <blockquote class="featured-ayah fade-in">
            <p class="ayah-arabic" dir="rtl" lang="ar">
                {move || FEATURED_AYAT[index.get()].arabic}
            </p>
            <p class="ayah-translation">{move || FEATURED_AYAT[index.get()].english}</p>
        </blockquote>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_at_list_end() {
        let mut index = 0;
        for step in 1..=FEATURED_AYAT.len() * 2 {
            index = next_index(index);
            assert_eq!(index, step % FEATURED_AYAT.len());
        }
        assert_eq!(index, 0);
    }
}
