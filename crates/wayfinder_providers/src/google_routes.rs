use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfinder_core::{
    geopoint::GeoPoint, transport_mode::TransportMode, travel_result::RouteSummary,
};

use crate::error::TravelError;

pub const GOOGLE_ROUTES_API_URL: &str = "https://routes.googleapis.com";
pub const GOOGLE_ROUTES_COMPUTE_PATH: &str = "/directions/v2:computeRoutes";

/// Restricts the response payload to the two fields we read. Dropping the
/// mask makes Google return full route legs and polylines.
pub const GOOGLE_ROUTES_FIELD_MASK: &str = "routes.duration,routes.distanceMeters";

pub struct GoogleRoutesClientParams {
    /// API key, supplied by the caller. Never a source literal.
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub location: Location,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesBody {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleRoute {
    /// Duration with a trailing unit suffix, e.g. "600s"
    duration: String,
    distance_meters: u64,
}

#[derive(Deserialize)]
struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Vec<GoogleRoute>,
}

fn waypoint(point: GeoPoint) -> Waypoint {
    Waypoint {
        location: Location {
            lat_lng: LatLng {
                latitude: point.lat,
                longitude: point.lng,
            },
        },
    }
}

pub fn compute_routes_body(
    origin: GeoPoint,
    destination: GeoPoint,
    mode: TransportMode,
) -> ComputeRoutesBody {
    ComputeRoutesBody {
        origin: waypoint(origin),
        destination: waypoint(destination),
        travel_mode: mode.to_string(),
    }
}

/// Strips the trailing unit suffix from a duration like "600s". A value with
/// no numeric prefix is a parse failure, not a zero.
pub fn parse_duration_seconds(raw: &str) -> Result<u64, TravelError> {
    raw.trim_end_matches(|c: char| !c.is_ascii_digit())
        .parse::<u64>()
        .map_err(|_| TravelError::ParseDuration(raw.to_string()))
}

pub fn parse_routes_response(
    status: u16,
    body: &str,
) -> Result<Option<RouteSummary>, TravelError> {
    if !(200..300).contains(&status) {
        return Err(TravelError::Provider {
            status,
            message: body.to_string(),
        });
    }

    let response: ComputeRoutesResponse = serde_json::from_str(body)?;

    match response.routes.first() {
        Some(route) => Ok(Some(RouteSummary {
            duration_seconds: parse_duration_seconds(&route.duration)?,
            distance_meters: route.distance_meters,
        })),
        None => Ok(None),
    }
}

pub struct GoogleRoutesClient {
    params: GoogleRoutesClientParams,
    client: reqwest::Client,
}

impl GoogleRoutesClient {
    pub fn new(params: GoogleRoutesClientParams) -> Result<Self, TravelError> {
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .build()?;

        Ok(Self { params, client })
    }

    pub async fn travel_time(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TransportMode,
    ) -> Result<Option<RouteSummary>, TravelError> {
        let body = compute_routes_body(origin, destination, mode);
        let url = format!("{}{}", self.params.base_url, GOOGLE_ROUTES_COMPUTE_PATH);

        debug!("GoogleRoutesApi: Posting computeRoutes request ({})", mode);

        let response = self
            .client
            .post(url)
            .header("X-Goog-Api-Key", &self.params.api_key)
            .header("X-Goog-FieldMask", GOOGLE_ROUTES_FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        parse_routes_response(status, &text)
    }
}
