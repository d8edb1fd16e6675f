//! Widget components

mod audio_player;
mod ayah;
mod fallback_img;
mod form_status;
mod particles;
mod prayer;
mod tasbeeh;
mod to_top;

pub use audio_player::AudioControls;
pub use ayah::AyahRotator;
pub use fallback_img::FallbackImg;
pub use form_status::{FormStatus, StatusKind, StatusMessage};
pub use particles::ParticlesCanvas;
pub use prayer::PrayerTimesWidget;
pub use tasbeeh::TasbeehCounter;
pub use to_top::ToTopButton;
