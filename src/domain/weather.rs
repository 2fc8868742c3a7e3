use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

mod conditions;
#[cfg(test)]
mod tests;

pub use conditions::{ConditionFamily, DEFAULT_ICON, condition_family, condition_glyph, icon_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Units::Celsius => "°C",
            Units::Fahrenheit => "°F",
        }
    }
}

/// Country name the weather provider reports for the US; drives the default unit.
const FAHRENHEIT_COUNTRY: &str = "United States of America";

pub const FALLBACK_CONDITION_TEXT: &str = "Not available";
pub const FALLBACK_TEMP_C: f32 = 21.0;
pub const FALLBACK_TEMP_F: f32 = 69.8;
/// Outside every documented family, so the fallback renders the default icon.
pub const FALLBACK_CONDITION_CODE: i32 = -1;

/// One decoded reading from the weather provider, plus the optional refined
/// local time from the secondary time endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub city: String,
    pub country: String,
    pub condition_text: String,
    pub condition_code: i32,
    pub is_day: bool,
    pub temp_c: f32,
    pub temp_f: f32,
    pub local_time: Option<NaiveDateTime>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

impl Observation {
    /// Fixed substitute rendered when any fetch step fails.
    #[must_use]
    pub fn fallback(city: &str) -> Self {
        Self {
            city: city.to_string(),
            country: String::new(),
            condition_text: FALLBACK_CONDITION_TEXT.to_string(),
            condition_code: FALLBACK_CONDITION_CODE,
            is_day: true,
            temp_c: FALLBACK_TEMP_C,
            temp_f: FALLBACK_TEMP_F,
            local_time: None,
            latitude: None,
            longitude: None,
            fetched_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn default_units(&self) -> Units {
        if self.country == FAHRENHEIT_COUNTRY {
            Units::Fahrenheit
        } else {
            Units::Celsius
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn temp(&self, units: Units) -> i32 {
        let value = match units {
            Units::Celsius => self.temp_c,
            Units::Fahrenheit => self.temp_f,
        };
        value.round() as i32
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        icon_file(self.condition_code, self.is_day)
    }

    #[must_use]
    pub fn coords(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
