//! Domain models and pure page logic.

mod contact;
mod counter;
mod playback;
mod prayer;
mod theme;
mod transport;

pub use contact::{is_valid_email, ContactDraft, ContactPayload, SubmitAction, SUBJECT_PREFIX};
pub use counter::Tasbeeh;
pub use playback::{AudioAction, PlaybackState, Track};
pub use prayer::{Coordinates, PrayerTimings, TimingsData, TimingsResponse};
pub use theme::Theme;
pub use transport::{EmailJsConfig, FormspreeConfig, Transport};
