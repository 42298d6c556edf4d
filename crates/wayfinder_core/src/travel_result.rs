use serde::{Deserialize, Serialize};

/// Duration and distance of the best route a provider returned, already
/// normalized to seconds and meters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub duration_seconds: u64,
    pub distance_meters: u64,
}

/// Normalized outcome of a single travel query, identical for every provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TravelResult {
    Ok {
        duration_seconds: u64,
        distance_meters: u64,
    },
    ZeroResults,
    Error {
        message: String,
    },
}

impl TravelResult {
    pub fn from_route(route: Option<RouteSummary>) -> Self {
        match route {
            Some(route) => TravelResult::Ok {
                duration_seconds: route.duration_seconds,
                distance_meters: route.distance_meters,
            },
            None => TravelResult::ZeroResults,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelStatus {
    Ok,
    ZeroResults,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueText {
    pub value: u64,
    pub text: String,
}

/// Caller-facing report shape: a status tag plus human-readable duration and
/// distance derivations on success, or an error string otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelReport {
    pub status: TravelStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<ValueText>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<ValueText>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn duration_text(duration_seconds: u64) -> String {
    format!("{} mins", duration_seconds / 60)
}

pub fn distance_text(distance_meters: u64) -> String {
    format!("{:.2} km", distance_meters as f64 / 1000.0)
}

impl From<TravelResult> for TravelReport {
    fn from(result: TravelResult) -> Self {
        match result {
            TravelResult::Ok {
                duration_seconds,
                distance_meters,
            } => TravelReport {
                status: TravelStatus::Ok,
                duration: Some(ValueText {
                    value: duration_seconds,
                    text: duration_text(duration_seconds),
                }),
                distance: Some(ValueText {
                    value: distance_meters,
                    text: distance_text(distance_meters),
                }),
                error: None,
            },
            TravelResult::ZeroResults => TravelReport {
                status: TravelStatus::ZeroResults,
                duration: None,
                distance: None,
                error: Some("No route found".to_string()),
            },
            TravelResult::Error { message } => TravelReport {
                status: TravelStatus::Error,
                duration: None,
                distance: None,
                error: Some(message),
            },
        }
    }
}
