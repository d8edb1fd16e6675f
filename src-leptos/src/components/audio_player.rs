//! Background recitation player.
//!
//! Playback only ever starts from a click. The [`PlaybackState`] machine
//! decides what each control does; this component mirrors the returned
//! action onto the `<audio>` element and rolls the enabled flag back if
//! the browser refuses to play.

use leptos::html::Audio;
use leptos::prelude::*;
use leptos::task::spawn_local;
use noorverse_types::{AudioAction, PlaybackState, Track};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

const PLAYLIST: [Track; 3] = [
    Track {
        title: "Surah Ar-Rahman",
        src: "./assets/audio/surah-rahman.mp3",
    },
    Track {
        title: "Surah Yaseen",
        src: "./assets/audio/surah-yaseen.mp3",
    },
    Track {
        title: "Soft Recitation",
        src: "./assets/audio/soft-recitation.mp3",
    },
];

/// Sound toggle plus the prev/play/next bar and track title.
#[component]
pub fn AudioControls() -> impl IntoView {
    let audio_ref = NodeRef::<Audio>::new();
    let state = RwSignal::new(PlaybackState::default());

    let on_toggle = move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        let mut playback = state.get_untracked();
        let action = playback.toggle();
        state.set(playback);
        apply(action, &audio, state);
    };

    let on_play_pause = move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        let mut playback = state.get_untracked();
        let action = playback.play_pause(audio.paused());
        state.set(playback);
        apply(action, &audio, state);
    };

    let on_prev = move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        let mut playback = state.get_untracked();
        if let Some(action) = playback.prev(PLAYLIST.len()) {
            state.set(playback);
            apply(action, &audio, state);
        }
    };

    let on_next = move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        let mut playback = state.get_untracked();
        if let Some(action) = playback.next(PLAYLIST.len()) {
            state.set(playback);
            apply(action, &audio, state);
        }
    };

    let enabled = Memo::new(move |_| state.get().enabled);

    view! {
        <div class="audio-player">
            <button
                class="icon-button audio-toggle"
                aria-label="Toggle background recitation"
                aria-pressed=move || enabled.get().to_string()
                on:click=on_toggle
            >
                <span class="icon">{move || if enabled.get() { "🔈" } else { "🔊" }}</span>
            </button>
            <div class="player-bar">
                <button class="icon-button" aria-label="Previous track" on:click=on_prev>
                    "⏮"
                </button>
                <button class="icon-button" aria-label="Play or pause" on:click=on_play_pause>
                    {move || if enabled.get() { "⏸" } else { "▶" }}
                </button>
                <button class="icon-button" aria-label="Next track" on:click=on_next>
                    "⏭"
                </button>
                <span class="track-title">{move || PLAYLIST[state.get().current].title}</span>
            </div>
            <audio node_ref=audio_ref src=PLAYLIST[0].src preload="none"></audio>
        </div>
    }
}

fn apply(action: AudioAction, audio: &HtmlAudioElement, state: RwSignal<PlaybackState>) {
    match action {
        AudioAction::Play => start_playback(audio.clone(), state),
        AudioAction::Pause => {
            let _ = audio.pause();
        }
        AudioAction::Load { index } => audio.set_src(PLAYLIST[index].src),
        AudioAction::LoadAndPlay { index } => {
            audio.set_src(PLAYLIST[index].src);
            start_playback(audio.clone(), state);
        }
    }
}

fn start_playback(audio: HtmlAudioElement, state: RwSignal<PlaybackState>) {
    spawn_local(async move {
        let played = match audio.play() {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(err) => Err(err),
        };
        if let Err(err) = played {
            // Autoplay policy or a missing media file; drop back to silent.
            log::warn!("audio playback failed: {err:?}");
            state.update(|s| s.enabled = false);
        }
    });
}
