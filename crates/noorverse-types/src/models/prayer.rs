//! Prayer times: coordinates and the AlAdhan response shape.

use serde::Deserialize;

/// A geolocation fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The five daily timings out of an AlAdhan `data.timings` object.
///
/// The API returns more keys than these; everything else is ignored, and
/// a missing key renders as a dash rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrayerTimings {
    #[serde(default, rename = "Fajr")]
    pub fajr: Option<String>,
    #[serde(default, rename = "Dhuhr")]
    pub dhuhr: Option<String>,
    #[serde(default, rename = "Asr")]
    pub asr: Option<String>,
    #[serde(default, rename = "Maghrib")]
    pub maghrib: Option<String>,
    #[serde(default, rename = "Isha")]
    pub isha: Option<String>,
}

impl PrayerTimings {
    /// Label/time pairs in display order, with `-` for anything missing.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        let cell = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        [
            ("Fajr", cell(&self.fajr)),
            ("Dhuhr", cell(&self.dhuhr)),
            ("Asr", cell(&self.asr)),
            ("Maghrib", cell(&self.maghrib)),
            ("Isha", cell(&self.isha)),
        ]
    }
}

/// Envelope around the timings payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsResponse {
    pub data: TimingsData,
}

/// The `data` object of a timings response.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsData {
    pub timings: PrayerTimings,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_timings_response() {
        let body = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "timings": {
                    "Fajr": "04:12",
                    "Sunrise": "05:48",
                    "Dhuhr": "12:19",
                    "Asr": "15:54",
                    "Sunset": "18:50",
                    "Maghrib": "18:50",
                    "Isha": "20:15",
                    "Midnight": "00:19"
                }
            }
        }"#;
        let decoded: TimingsResponse = serde_json::from_str(body).unwrap();
        let rows = decoded.data.timings.rows();
        assert_eq!(rows[0], ("Fajr", "04:12".to_string()));
        assert_eq!(rows[2], ("Asr", "15:54".to_string()));
        assert_eq!(rows[4], ("Isha", "20:15".to_string()));
    }

    #[test]
    fn missing_keys_render_as_dash() {
        let body = r#"{"data": {"timings": {"Fajr": "04:12"}}}"#;
        let decoded: TimingsResponse = serde_json::from_str(body).unwrap();
        let rows = decoded.data.timings.rows();
        assert_eq!(rows[0].1, "04:12");
        for (_, time) in &rows[1..] {
            assert_eq!(time, "-");
        }
    }

    #[test]
    fn rows_keep_display_order() {
        let labels: Vec<&str> = PrayerTimings::default()
            .rows()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, ["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }
}
