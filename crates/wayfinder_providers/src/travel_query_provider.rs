use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug, PartialEq)]
pub enum TravelQueryProvider {
    /// https://developer.apple.com/documentation/applemapsserverapi
    AppleMaps,

    /// https://developers.google.com/maps/documentation/routes
    GoogleRoutes,

    AsTheCrowFlies { speed_kmh: f64 },
}
