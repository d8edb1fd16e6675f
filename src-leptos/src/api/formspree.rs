//! Formspree transport: form-encoded POST, JSON answer requested.

use noorverse_types::{ContactPayload, FormspreeConfig, TransportError};
use web_sys::{FormData, Request, RequestInit};

/// POST the payload to the configured form endpoint.
pub async fn deliver(
    config: &FormspreeConfig,
    payload: &ContactPayload,
) -> Result<(), TransportError> {
    let failed = |message: String| TransportError::Failed { message };

    let form = FormData::new().map_err(|e| failed(format!("FormData failed: {e:?}")))?;
    for (name, value) in payload.fields() {
        form.append_with_str(name, value)
            .map_err(|e| failed(format!("FormData append failed: {e:?}")))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&config.endpoint, &opts)
        .map_err(|e| failed(format!("Failed to create request: {e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| failed(format!("Failed to set headers: {e:?}")))?;

    let response = super::send(&request).await.map_err(failed)?;
    if !response.ok() {
        return Err(TransportError::BadStatus {
            status: response.status(),
        });
    }
    Ok(())
}
