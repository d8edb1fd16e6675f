//! Outbound calls made by the page.
//!
//! The AlAdhan and Formspree clients share the fetch plumbing below; the
//! EmailJS client goes through its page-global SDK instead. Request
//! failures surface as strings at this level and each client maps them
//! onto its own error type. [`deliver`] is the one place a screened
//! contact payload fans out to a transport.

pub mod aladhan;
pub mod emailjs;
pub mod formspree;

use noorverse_types::{ContactPayload, Transport, TransportError};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

/// Hand a screened contact payload to the configured relay.
///
/// The form selector rides along because the EmailJS SDK serializes the
/// live form element itself instead of accepting a payload.
pub async fn deliver(
    transport: &Transport,
    payload: &ContactPayload,
    form_selector: &str,
) -> Result<(), TransportError> {
    log::debug!("dispatching contact message via {}", transport.name());
    match transport {
        Transport::EmailJs(config) => emailjs::deliver(config, form_selector).await,
        Transport::Formspree(config) => formspree::deliver(config, payload).await,
    }
}

/// Send a prepared request and hand back the raw response.
pub(crate) async fn send(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response".to_string())
}

/// Decode a response body as JSON into `R`.
pub(crate) async fn decode_json<R: DeserializeOwned>(response: &Response) -> Result<R, String> {
    let json = JsFuture::from(
        response
            .json()
            .map_err(|e| format!("JSON parse failed: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("JSON future failed: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Deserialize failed: {}", e))
}
