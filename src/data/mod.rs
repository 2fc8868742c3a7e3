pub mod icons;
pub mod time_api;
pub mod weather_api;

use thiserror::Error;

/// Failure of either remote call. Collapsed into the fallback observation at
/// the app layer and logged; never shown to the user.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} endpoint returned status {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{endpoint} payload missing or malformed: {detail}")]
    Payload {
        endpoint: &'static str,
        detail: String,
    },
}
