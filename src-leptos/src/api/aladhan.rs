//! AlAdhan timings API client.

use noorverse_types::{Coordinates, PrayerTimesError, PrayerTimings, TimingsResponse};
use web_sys::{Request, RequestInit};

const TIMINGS_BASE: &str = "https://api.aladhan.com/v1/timings";

/// Calculation method 2 (Islamic Society of North America).
const METHOD: u8 = 2;

fn timings_url(coords: Coordinates) -> String {
    format!(
        "{TIMINGS_BASE}?latitude={}&longitude={}&method={METHOD}",
        coords.latitude, coords.longitude
    )
}

/// Fetch today's five timings for a position.
pub async fn fetch_timings(coords: Coordinates) -> Result<PrayerTimings, PrayerTimesError> {
    let request_error = |message: String| PrayerTimesError::Request { message };

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(&timings_url(coords), &opts)
        .map_err(|e| request_error(format!("Failed to create request: {e:?}")))?;

    let response = super::send(&request).await.map_err(request_error)?;
    if !response.ok() {
        return Err(request_error(format!("HTTP error: {}", response.status())));
    }

    let decoded: TimingsResponse = super::decode_json(&response).await.map_err(request_error)?;
    Ok(decoded.data.timings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_coordinates_and_method() {
        let url = timings_url(Coordinates {
            latitude: 21.4225,
            longitude: 39.8262,
        });
        assert_eq!(
            url,
            "https://api.aladhan.com/v1/timings?latitude=21.4225&longitude=39.8262&method=2"
        );
    }

    #[test]
    fn negative_coordinates_pass_through() {
        let url = timings_url(Coordinates {
            latitude: -6.2,
            longitude: 106.8,
        });
        assert!(url.contains("latitude=-6.2&longitude=106.8"));
    }
}
