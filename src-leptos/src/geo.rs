//! Geolocation, promisified.
//!
//! `getCurrentPosition` is callback-shaped, so it gets wrapped in a
//! `js_sys::Promise` and awaited. The position and error objects are read
//! through `Reflect` because their fields live on the prototype, out of
//! reach of serde.

use js_sys::{Promise, Reflect};
use noorverse_types::{Coordinates, PrayerTimesError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::PositionOptions;

// GeolocationPositionError.PERMISSION_DENIED
const CODE_PERMISSION_DENIED: f64 = 1.0;

/// Ask the browser for one high-accuracy position fix.
pub async fn current_position(timeout_ms: u32) -> Result<Coordinates, PrayerTimesError> {
    let geolocation = web_sys::window()
        .ok_or(PrayerTimesError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| PrayerTimesError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        let on_position = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js({
            let reject = reject.clone();
            move |error: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &error);
            }
        });

        let options = PositionOptions::new();
        options.set_enable_high_accuracy(true);
        options.set_timeout(timeout_ms);

        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            on_position.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        ) {
            log::warn!("getCurrentPosition threw: {err:?}");
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => read_coordinates(&position),
        Err(error) => Err(read_error(&error)),
    }
}

fn read_coordinates(position: &JsValue) -> Result<Coordinates, PrayerTimesError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).map_err(|_| {
        PrayerTimesError::Geolocation {
            message: "position without coords".to_string(),
        }
    })?;
    let field = |name: &str| {
        Reflect::get(&coords, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
    };
    match (field("latitude"), field("longitude")) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(PrayerTimesError::Geolocation {
            message: "malformed coords".to_string(),
        }),
    }
}

fn read_error(error: &JsValue) -> PrayerTimesError {
    let code = Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64());
    if code == Some(CODE_PERMISSION_DENIED) {
        return PrayerTimesError::PermissionDenied;
    }
    let message = Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "unknown geolocation error".to_string());
    PrayerTimesError::Geolocation { message }
}
