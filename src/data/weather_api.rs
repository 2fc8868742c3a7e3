use chrono::{NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use super::ProviderError;
use crate::domain::weather::Observation;

const WEATHER_URL: &str = "https://api.weatherapi.com/v1/current.json";
const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(WEATHER_URL, api_key)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Current conditions for a city. The city name is URL-encoded by the
    /// query builder.
    pub async fn fetch_current(&self, city: &str) -> Result<Observation, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint: "weather",
                status,
            });
        }

        let payload: CurrentResponse =
            response.json().await.map_err(|err| ProviderError::Payload {
                endpoint: "weather",
                detail: err.to_string(),
            })?;

        Ok(payload.into_observation())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: LocationBlock,
    current: CurrentBlock,
}

impl CurrentResponse {
    fn into_observation(self) -> Observation {
        Observation {
            city: self.location.name,
            country: self.location.country,
            condition_text: self.current.condition.text,
            condition_code: self.current.condition.code,
            is_day: self.current.is_day == 1,
            temp_c: self.current.temp_c,
            temp_f: self.current.temp_f,
            local_time: self.location.localtime.as_deref().and_then(parse_localtime),
            latitude: self.location.lat,
            longitude: self.location.lon,
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
    name: String,
    country: String,
    lat: Option<f64>,
    lon: Option<f64>,
    localtime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temp_c: f32,
    temp_f: f32,
    is_day: u8,
    condition: ConditionBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    text: String,
    code: i32,
}

fn parse_localtime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, LOCALTIME_FORMAT).ok()
}
