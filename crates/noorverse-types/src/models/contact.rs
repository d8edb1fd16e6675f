//! Contact form screening and payload assembly.
//!
//! Everything here is pure: the submit handler collects the field values,
//! calls [`ContactDraft::screen`], and only then touches a transport. Spam
//! and invalid input never produce a network request.

use crate::error::ValidationError;

/// Prefix stamped onto every outgoing subject line.
pub const SUBJECT_PREFIX: &str = "[NoorVerse Contact] ";

/// Subject used when the visitor left the name field empty.
const SUBJECT_FALLBACK: &str = "Message";

// ===== Email validation =====

/// Lightweight email shape check.
///
/// Accepts `local@domain.tld` where the whole address is 3 to 254
/// characters, contains no whitespace and exactly one `@`, the local part
/// is non-empty, and the domain has a dot somewhere strictly inside it.
/// `a@b.co` passes; `a@b`, `a@.b` and `a@b.` do not.
pub fn is_valid_email(email: &str) -> bool {
    let length = email.chars().count();
    if !(3..=254).contains(&length) {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    (1..chars.len().saturating_sub(1)).any(|i| chars[i] == '.')
}

// ===== Draft and screening =====

/// Raw field values lifted from the form, before any screening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Visitor name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Message body
    pub message: String,
    /// Optional dua request
    pub dua: String,
    /// Honeypot field, invisible to humans
    pub website: String,
}

/// What the submit handler should do with a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Honeypot tripped: show the success line, send nothing
    PretendSuccess,
    /// Validation failed: show the error, send nothing
    Reject(ValidationError),
    /// Draft is clean: hand the payload to the active transport
    Deliver(ContactPayload),
}

impl ContactDraft {
    /// Decide what to do with this draft.
    ///
    /// Checks run in order: honeypot, required fields, email shape.
    /// Validation looks at trimmed values, but a delivered payload keeps
    /// the fields exactly as typed.
    pub fn screen(&self) -> SubmitAction {
        if !self.website.trim().is_empty() {
            return SubmitAction::PretendSuccess;
        }
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return SubmitAction::Reject(ValidationError::MissingRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return SubmitAction::Reject(ValidationError::InvalidEmail);
        }
        SubmitAction::Deliver(self.to_payload())
    }

    fn to_payload(&self) -> ContactPayload {
        let subject = if self.name.is_empty() {
            format!("{SUBJECT_PREFIX}{SUBJECT_FALLBACK}")
        } else {
            format!("{SUBJECT_PREFIX}{}", self.name)
        };
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            dua: self.dua.clone(),
            website: self.website.clone(),
            subject,
        }
    }
}

// ===== Outgoing payload =====

/// A screened draft ready for a transport, subject line included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    /// Visitor name, as typed
    pub name: String,
    /// Reply address, as typed
    pub email: String,
    /// Message body, as typed
    pub message: String,
    /// Optional dua request, as typed
    pub dua: String,
    /// Honeypot value, carried through (empty for screened drafts)
    pub website: String,
    /// `SUBJECT_PREFIX` plus the name, or a fallback word
    pub subject: String,
}

impl ContactPayload {
    /// Field names and values in the order transports serialize them.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
            ("dua", self.dua.as_str()),
            ("website", self.website.as_str()),
            ("subject", self.subject.as_str()),
        ]
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_draft() -> ContactDraft {
        ContactDraft {
            name: "Aisha".to_string(),
            email: "aisha@example.com".to_string(),
            message: "Assalamu alaikum".to_string(),
            dua: String::new(),
            website: String::new(),
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("aisha@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b\t.com"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
    }

    #[test]
    fn enforces_length_bounds() {
        assert!(!is_valid_email("a@"));
        // "@ex.co" is 6 chars, so a 248-char local hits 254 exactly.
        let local = "a".repeat(248);
        assert!(is_valid_email(&format!("{local}@ex.co")));
        let local = "a".repeat(249);
        assert!(!is_valid_email(&format!("{local}@ex.co")));
    }

    #[test]
    fn honeypot_short_circuits_everything() {
        let mut draft = clean_draft();
        draft.website = "http://spam.example".to_string();
        // Even with all required fields filled, a tripped honeypot wins.
        assert_eq!(draft.screen(), SubmitAction::PretendSuccess);

        // A bot that also leaves required fields empty still sees success.
        let draft = ContactDraft {
            website: "x".to_string(),
            ..ContactDraft::default()
        };
        assert_eq!(draft.screen(), SubmitAction::PretendSuccess);
    }

    #[test]
    fn whitespace_honeypot_does_not_trip() {
        let mut draft = clean_draft();
        draft.website = "   ".to_string();
        assert!(matches!(draft.screen(), SubmitAction::Deliver(_)));
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in ["name", "email", "message"] {
            let mut draft = clean_draft();
            match field {
                "name" => draft.name = "  ".to_string(),
                "email" => draft.email = String::new(),
                _ => draft.message = "\n".to_string(),
            }
            assert_eq!(
                draft.screen(),
                SubmitAction::Reject(ValidationError::MissingRequired),
                "blank {field} should be rejected"
            );
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut draft = clean_draft();
        draft.email = "not-an-address".to_string();
        assert_eq!(
            draft.screen(),
            SubmitAction::Reject(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_is_trimmed_before_validation() {
        let mut draft = clean_draft();
        draft.email = "  aisha@example.com  ".to_string();
        assert!(matches!(draft.screen(), SubmitAction::Deliver(_)));
    }

    #[test]
    fn payload_keeps_fields_as_typed() {
        let mut draft = clean_draft();
        draft.name = "  Aisha  ".to_string();
        draft.dua = "Please pray for my family".to_string();
        let SubmitAction::Deliver(payload) = draft.screen() else {
            panic!("expected delivery");
        };
        assert_eq!(payload.name, "  Aisha  ");
        assert_eq!(payload.dua, "Please pray for my family");
        assert_eq!(payload.subject, "[NoorVerse Contact]   Aisha  ");
    }

    #[test]
    fn subject_prefix_is_fixed() {
        let SubmitAction::Deliver(payload) = clean_draft().screen() else {
            panic!("expected delivery");
        };
        assert_eq!(payload.subject, "[NoorVerse Contact] Aisha");
    }

    #[test]
    fn fields_serialize_in_stable_order() {
        let SubmitAction::Deliver(payload) = clean_draft().screen() else {
            panic!("expected delivery");
        };
        let names: Vec<&str> = payload.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["name", "email", "message", "dua", "website", "subject"]);
    }
}
