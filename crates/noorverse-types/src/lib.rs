//! # NoorVerse Types
//!
//! Domain models, pure logic, and error definitions for NoorVerse Web.
//!
//! This crate provides the foundational type system for the site:
//!
//! - **`error`** - Typed failures for form validation, mail transport, and
//!   prayer lookup
//! - **`models`** - Domain models (ContactDraft, Transport, PrayerTimings,
//!   PlaybackState, Tasbeeh, Theme)
//!
//! ## Architecture Role
//!
//! `noorverse-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!   noorverse-types (this crate)
//!           │
//!           ▼
//!   noorverse-leptos (WASM frontend)
//! ```
//!
//! Nothing in here touches the browser. Every rule of the page that can be
//! expressed without a DOM lives in this crate, so email screening, playlist
//! stepping, counter persistence, and theme toggling are all testable with a
//! native `cargo test`.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{PrayerTimesError, TransportError, ValidationError};

// Re-export core model types
pub use models::{
    is_valid_email, AudioAction, ContactDraft, ContactPayload, Coordinates, EmailJsConfig,
    FormspreeConfig, PlaybackState, PrayerTimings, SubmitAction, Tasbeeh, Theme, TimingsResponse,
    Track, Transport,
};
