use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use wayfinder_core::{
    geopoint::GeoPoint,
    transport_mode::{TransportMode, UnsupportedTransportMode},
    travel_result::RouteSummary,
};

use crate::error::TravelError;

pub const APPLE_MAPS_API_URL: &str = "https://maps-api.apple.com";
pub const APPLE_MAPS_DIRECTIONS_PATH: &str = "/v1/directions";

pub struct AppleMapsClientParams {
    /// Maps server API token (JWT), supplied by the caller. Never a source
    /// literal.
    pub jwt_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppleRoute {
    duration_seconds: u64,
    distance_meters: u64,
}

#[derive(Deserialize)]
struct AppleDirectionsResponse {
    #[serde(default)]
    routes: Vec<AppleRoute>,
}

/// Apple uses its own transport type tokens. The directions endpoint has no
/// cycling profile, so Bicycle is rejected before anything goes on the wire.
pub fn transport_type(mode: TransportMode) -> Result<&'static str, TravelError> {
    match mode {
        TransportMode::Drive => Ok("automobile"),
        TransportMode::Walk => Ok("walking"),
        TransportMode::Transit => Ok("transit"),
        TransportMode::Bicycle => Err(TravelError::InvalidMode(UnsupportedTransportMode(
            mode.to_string(),
        ))),
    }
}

pub fn directions_query(
    origin: GeoPoint,
    destination: GeoPoint,
    transport_type: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("origin", format!("{},{}", origin.lat, origin.lng)),
        (
            "destination",
            format!("{},{}", destination.lat, destination.lng),
        ),
        ("transportType", transport_type.to_string()),
    ]
}

pub fn parse_directions_response(
    status: u16,
    body: &str,
) -> Result<Option<RouteSummary>, TravelError> {
    if !(200..300).contains(&status) {
        return Err(TravelError::Provider {
            status,
            message: body.to_string(),
        });
    }

    let response: AppleDirectionsResponse = serde_json::from_str(body)?;

    Ok(response.routes.first().map(|route| RouteSummary {
        duration_seconds: route.duration_seconds,
        distance_meters: route.distance_meters,
    }))
}

pub struct AppleMapsClient {
    params: AppleMapsClientParams,
    client: reqwest::Client,
}

impl AppleMapsClient {
    pub fn new(params: AppleMapsClientParams) -> Result<Self, TravelError> {
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
        let transport_type = transport_type(mode)?;
        let url = format!("{}{}", self.params.base_url, APPLE_MAPS_DIRECTIONS_PATH);

        debug!("AppleMapsApi: Requesting directions ({})", transport_type);

        let response = self
            .client
            .get(url)
            .query(&directions_query(origin, destination, transport_type))
            .bearer_auth(&self.params.jwt_token)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_directions_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ROUTE: &str = r#"
{
    "routes": [
        { "durationSeconds": 600, "distanceMeters": 5000, "hasTolls": false }
    ]
}
"#;

    #[test]
    fn test_transport_type_mapping() {
        assert_eq!(transport_type(TransportMode::Drive).unwrap(), "automobile");
        assert_eq!(transport_type(TransportMode::Walk).unwrap(), "walking");
        assert_eq!(transport_type(TransportMode::Transit).unwrap(), "transit");
    }

    #[test]
    fn test_transport_type_rejects_bicycle() {
        let err = transport_type(TransportMode::Bicycle).unwrap_err();

        assert!(matches!(err, TravelError::InvalidMode(_)));
        assert_eq!(err.to_string(), "unsupported transport mode: BICYCLE");
    }

    #[test]
    fn test_directions_query_encodes_coordinates() {
        let query = directions_query(
            GeoPoint::new(43.0731, -89.4012),
            GeoPoint::new(43.0766, -89.4125),
            "automobile",
        );

        assert_eq!(
            query,
            vec![
                ("origin", "43.0731,-89.4012".to_string()),
                ("destination", "43.0766,-89.4125".to_string()),
                ("transportType", "automobile".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_response_with_one_route() {
        let route = parse_directions_response(200, ONE_ROUTE).unwrap();

        assert_eq!(
            route,
            Some(RouteSummary {
                duration_seconds: 600,
                distance_meters: 5000,
            })
        );
    }

    #[test]
    fn test_parse_response_with_no_routes() {
        assert_eq!(
            parse_directions_response(200, r#"{"routes":[]}"#).unwrap(),
            None
        );
        assert_eq!(parse_directions_response(200, "{}").unwrap(), None);
    }

    #[test]
    fn test_parse_response_with_error_status() {
        let err = parse_directions_response(404, "not found").unwrap_err();

        match err {
            TravelError::Provider { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_with_malformed_body() {
        let err = parse_directions_response(200, "not json").unwrap_err();

        assert!(matches!(err, TravelError::Parse(_)));
    }
}
