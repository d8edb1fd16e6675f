//! Inline status line under the contact form.

use leptos::prelude::*;

/// Visual flavor of a status line.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// A message plus its flavor.
#[derive(Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Live region rendering the current form status, empty until one is set.
#[component]
pub fn FormStatus(#[prop(into)] status: Signal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <p
            class=move || {
                match status.get() {
                    Some(message) => format!("form-status {}", message.kind.class()),
                    None => "form-status".to_string(),
                }
            }
            role="status"
            aria-live="polite"
        >
            {move || status.get().map(|message| message.text)}
        </p>
    }
}
