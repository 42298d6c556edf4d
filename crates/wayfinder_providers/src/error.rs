use thiserror::Error;
use wayfinder_core::{transport_mode::UnsupportedTransportMode, travel_result::TravelResult};

#[derive(Debug, Error)]
pub enum TravelError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid duration in response: {0:?}")]
    ParseDuration(String),

    #[error(transparent)]
    InvalidMode(#[from] UnsupportedTransportMode),

    #[error("Missing credential in environment: {0}")]
    MissingCredential(&'static str),
}

impl From<TravelError> for TravelResult {
    fn from(err: TravelError) -> Self {
        TravelResult::Error {
            message: err.to_string(),
        }
    }
}
