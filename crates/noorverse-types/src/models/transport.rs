//! Contact transport selection.

/// Where screened contact payloads go.
///
/// The page config picks exactly one; with EmailJS configured the
/// Formspree endpoint is never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Send through the EmailJS browser SDK
    EmailJs(EmailJsConfig),
    /// POST form data to a Formspree endpoint
    Formspree(FormspreeConfig),
}

impl Transport {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Transport::EmailJs(_) => "emailjs",
            Transport::Formspree(_) => "formspree",
        }
    }
}

/// EmailJS credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    /// Account public key, passed to `emailjs.init`
    pub public_key: String,
    /// Service to send through
    pub service_id: String,
    /// Template to render
    pub template_id: String,
}

/// Formspree endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormspreeConfig {
    /// Full form URL, e.g. `https://formspree.io/f/abcdwxyz`
    pub endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_for_logging() {
        let emailjs = Transport::EmailJs(EmailJsConfig {
            public_key: "pk".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
        });
        let formspree = Transport::Formspree(FormspreeConfig {
            endpoint: "https://formspree.io/f/abcdwxyz".to_string(),
        });
        assert_eq!(emailjs.name(), "emailjs");
        assert_eq!(formspree.name(), "formspree");
    }
}
