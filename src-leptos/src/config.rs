//! Site configuration.
//!
//! One value of [`SiteConfig`] is built in `App` and shared through context.
//! Widgets read their knobs from it instead of reaching for globals, and the
//! contact transport is an explicit typed choice: `None` means the form
//! renders but every delivery attempt reports failure.

use noorverse_types::{EmailJsConfig, FormspreeConfig, Transport};

/// Page-wide configuration handed to the widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Where contact submissions go, if anywhere
    pub transport: Option<Transport>,
    /// Milliseconds between featured ayah rotations
    pub ayah_interval_ms: u32,
    /// Milliseconds before giving up on a geolocation fix
    pub geolocation_timeout_ms: u32,
}

impl SiteConfig {
    /// Deployment settings for the public site.
    ///
    /// Fill in real EmailJS identifiers here, or swap to
    /// `Transport::Formspree` with the form endpoint. Leaving `transport`
    /// as `None` keeps the page fully working minus outbound mail.
    pub fn site_default() -> Self {
        Self {
            transport: Some(Transport::EmailJs(EmailJsConfig {
                public_key: "YOUR_EMAILJS_PUBLIC_KEY".to_string(),
                service_id: "YOUR_SERVICE_ID".to_string(),
                template_id: "YOUR_TEMPLATE_ID".to_string(),
            })),
            ayah_interval_ms: 6_000,
            geolocation_timeout_ms: 8_000,
        }
    }

    /// Same settings pointed at Formspree instead of EmailJS.
    pub fn with_formspree(endpoint: impl Into<String>) -> Self {
        Self {
            transport: Some(Transport::Formspree(FormspreeConfig {
                endpoint: endpoint.into(),
            })),
            ..Self::site_default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::site_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_picks_emailjs() {
        let config = SiteConfig::default();
        assert_eq!(config.transport.map(|t| t.name()), Some("emailjs"));
        assert_eq!(config.ayah_interval_ms, 6_000);
    }

    #[test]
    fn formspree_variant_swaps_transport_only() {
        let config = SiteConfig::with_formspree("https://formspree.io/f/abcdwxyz");
        assert_eq!(config.transport.map(|t| t.name()), Some("formspree"));
        assert_eq!(config.geolocation_timeout_ms, 8_000);
    }
}
