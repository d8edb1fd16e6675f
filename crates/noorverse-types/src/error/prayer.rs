//! Failures while resolving location or fetching prayer timings.

use thiserror::Error;

/// Why the prayer times widget could not fill its grid.
///
/// `Unsupported` is the only variant the widget swallows silently; the
/// rest render as the blocked/unavailable line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrayerTimesError {
    /// The browser exposes no geolocation API at all
    #[error("geolocation is not supported")]
    Unsupported,

    /// The visitor denied the geolocation prompt
    #[error("location permission denied")]
    PermissionDenied,

    /// Geolocation failed for another reason (timeout, unavailable)
    #[error("geolocation failed: {message}")]
    Geolocation {
        /// Browser-reported failure description
        message: String,
    },

    /// The timings API request or decode failed
    #[error("timings request failed: {message}")]
    Request {
        /// Underlying failure description
        message: String,
    },
}
