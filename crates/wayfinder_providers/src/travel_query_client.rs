use std::time::Duration;

use anyhow::Context;
use tracing::warn;
use wayfinder_core::{
    geopoint::GeoPoint,
    transport_mode::TransportMode,
    travel_result::{RouteSummary, TravelReport, TravelResult},
};

use crate::{
    apple_maps::{APPLE_MAPS_API_URL, AppleMapsClient, AppleMapsClientParams},
    error::TravelError,
    google_routes::{GOOGLE_ROUTES_API_URL, GoogleRoutesClient, GoogleRoutesClientParams},
    straight_line::straight_line_route,
    travel_query_provider::TravelQueryProvider,
};

pub const APPLE_MAPS_JWT_ENV_VAR: &str = "APPLE_MAPS_JWT";
pub const GOOGLE_MAPS_API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TravelQueryClientParams {
    pub apple: AppleMapsClientParams,
    pub google: GoogleRoutesClientParams,
}

pub struct TravelQueryClient {
    apple_client: AppleMapsClient,
    google_client: GoogleRoutesClient,
}

fn read_env(var: &'static str) -> Result<String, TravelError> {
    std::env::var(var).map_err(|_| TravelError::MissingCredential(var))
}

impl TravelQueryClient {
    pub fn new(params: TravelQueryClientParams) -> Result<Self, TravelError> {
        Ok(Self {
            apple_client: AppleMapsClient::new(params.apple)?,
            google_client: GoogleRoutesClient::new(params.google)?,
        })
    }

    /// Reads provider credentials from the environment (a local .env is
    /// picked up if present) and points both clients at the live endpoints.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_token = read_env(APPLE_MAPS_JWT_ENV_VAR)?;
        let api_key = read_env(GOOGLE_MAPS_API_KEY_ENV_VAR)?;

        Self::new(TravelQueryClientParams {
            apple: AppleMapsClientParams {
                jwt_token,
                base_url: APPLE_MAPS_API_URL.to_string(),
                timeout: DEFAULT_REQUEST_TIMEOUT,
            },
            google: GoogleRoutesClientParams {
                api_key,
                base_url: GOOGLE_ROUTES_API_URL.to_string(),
                timeout: DEFAULT_REQUEST_TIMEOUT,
            },
        })
        .context("failed to build travel query client")
    }

    /// One request, one typed outcome. `Ok(None)` means the provider found
    /// no route.
    pub async fn try_travel_time(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TransportMode,
        provider: TravelQueryProvider,
    ) -> Result<Option<RouteSummary>, TravelError> {
        match provider {
            TravelQueryProvider::AppleMaps => {
                self.apple_client
                    .travel_time(origin, destination, mode)
                    .await
            }
            TravelQueryProvider::GoogleRoutes => {
                self.google_client
                    .travel_time(origin, destination, mode)
                    .await
            }
            TravelQueryProvider::AsTheCrowFlies { speed_kmh } => {
                Ok(Some(straight_line_route(origin, destination, speed_kmh)))
            }
        }
    }

    /// Same call with every failure folded into the normalized result.
    /// Nothing escapes as an `Err` or a panic.
    pub async fn get_travel_time(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TransportMode,
        provider: TravelQueryProvider,
    ) -> TravelResult {
        match self
            .try_travel_time(origin, destination, mode, provider)
            .await
        {
            Ok(route) => TravelResult::from_route(route),
            Err(err) => {
                warn!("TravelQuery: {:?} request failed: {}", provider, err);
                err.into()
            }
        }
    }

    pub async fn report(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        mode: TransportMode,
        provider: TravelQueryProvider,
    ) -> TravelReport {
        self.get_travel_time(origin, destination, mode, provider)
            .await
            .into()
    }
}
