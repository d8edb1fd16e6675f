//! Typed error definitions for NoorVerse Web.
//!
//! One module per failure domain, thiserror throughout. Every error here is
//! recoverable at widget scope: it surfaces as short inline text or a console
//! log line, and never takes the rest of the page down.

mod form;
mod prayer;
mod transport;

pub use form::ValidationError;
pub use prayer::PrayerTimesError;
pub use transport::TransportError;
