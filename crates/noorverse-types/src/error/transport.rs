//! Delivery failures from configured contact transports.

use thiserror::Error;

/// Raised by the EmailJS and Formspree clients when a send does not land.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The EmailJS SDK global is missing from the page
    #[error("EmailJS SDK is not loaded")]
    SdkUnavailable,

    /// The relay answered with a non-success HTTP status
    #[error("relay returned status {status}")]
    BadStatus {
        /// HTTP status code
        status: u16,
    },

    /// The request failed outright (network error, rejected promise)
    #[error("delivery failed: {message}")]
    Failed {
        /// Underlying failure description
        message: String,
    },
}
