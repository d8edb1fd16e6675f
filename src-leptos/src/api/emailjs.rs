//! EmailJS transport, backed by the page-global SDK.
//!
//! The SDK arrives via a script tag in `index.html` and lives at
//! `window.emailjs`. The bindings below are looked up at call time, so a
//! blocked or failed script load shows up as [`TransportError::SdkUnavailable`]
//! on the first send instead of breaking the page.

use js_sys::Reflect;
use noorverse_types::{EmailJsConfig, TransportError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = init, catch)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = emailjs, js_name = sendForm, catch)]
    async fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &str,
    ) -> Result<JsValue, JsValue>;
}

/// True when the SDK script tag actually loaded.
pub fn sdk_loaded() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("emailjs"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Bind the SDK to our account key. Call once at startup when the EmailJS
/// transport is configured.
pub fn init(config: &EmailJsConfig) {
    if !sdk_loaded() {
        log::warn!("EmailJS SDK not present, contact sends will fail");
        return;
    }
    if let Err(err) = emailjs_init(&config.public_key) {
        log::warn!("emailjs.init failed: {err:?}");
    }
}

/// Send the contact form through the SDK.
///
/// The SDK reads the fields straight off the live form element, so this
/// takes the form's CSS selector rather than a payload. Success is any
/// response status in [200, 300).
pub async fn deliver(config: &EmailJsConfig, form_selector: &str) -> Result<(), TransportError> {
    if !sdk_loaded() {
        return Err(TransportError::SdkUnavailable);
    }

    let result = emailjs_send_form(&config.service_id, &config.template_id, form_selector)
        .await
        .map_err(|err| TransportError::Failed {
            message: format!("{err:?}"),
        })?;

    let status = Reflect::get(&result, &JsValue::from_str("status"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u16;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(TransportError::BadStatus { status })
    }
}
