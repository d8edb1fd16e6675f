//! Contact form validation errors.

use thiserror::Error;

/// A submission that must not leave the page.
///
/// `Display` carries the inline text shown in the form status region, so
/// these strings face the user exactly as written here.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the required fields (name, email, message) is empty
    #[error("Please fill in Name, Email and Message.")]
    MissingRequired,

    /// The email field does not look like `local@domain.tld`
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
