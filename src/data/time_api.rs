use chrono::{NaiveDateTime, Timelike};
use reqwest::Client;
use serde::Deserialize;

use super::ProviderError;

const TIME_URL: &str = "https://timeapi.io/api/time/current/coordinate";

/// Secondary lookup refining the local time by coordinates. Optional: any
/// failure here leaves the weather payload's own localtime in place.
#[derive(Debug, Clone)]
pub struct TimeClient {
    client: Client,
    base_url: String,
}

impl Default for TimeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(TIME_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_local_time(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NaiveDateTime, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint: "time",
                status,
            });
        }

        let payload: TimeResponse =
            response.json().await.map_err(|err| ProviderError::Payload {
                endpoint: "time",
                detail: err.to_string(),
            })?;

        parse_datetime(&payload.date_time).ok_or_else(|| ProviderError::Payload {
            endpoint: "time",
            detail: format!("unparseable dateTime {:?}", payload.date_time),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TimeResponse {
    #[serde(rename = "dateTime")]
    date_time: String,
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    // Second precision is all the clock displays.
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|t| t.with_nanosecond(0).unwrap_or(t))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn parses_with_and_without_fractional_seconds() {
        let expected = NaiveDate::from_ymd_opt(2026, 11, 26)
            .unwrap()
            .and_hms_opt(21, 15, 30)
            .unwrap();
        assert_eq!(parse_datetime("2026-11-26T21:15:30"), Some(expected));
        assert_eq!(parse_datetime("2026-11-26T21:15:30.1234567"), Some(expected));
        assert_eq!(parse_datetime("yesterday"), None);
    }
}
