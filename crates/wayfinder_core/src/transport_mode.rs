use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A transport mode the caller asked for but the target provider (or the
/// parser) cannot serve. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported transport mode: {0}")]
pub struct UnsupportedTransportMode(pub String);

#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Drive,
    Walk,
    Bicycle,
    Transit,
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMode::Drive => "DRIVE",
                TransportMode::Walk => "WALK",
                TransportMode::Bicycle => "BICYCLE",
                TransportMode::Transit => "TRANSIT",
            }
        )
    }
}

impl FromStr for TransportMode {
    type Err = UnsupportedTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRIVE" => Ok(TransportMode::Drive),
            "WALK" => Ok(TransportMode::Walk),
            "BICYCLE" => Ok(TransportMode::Bicycle),
            "TRANSIT" => Ok(TransportMode::Transit),
            other => Err(UnsupportedTransportMode(other.to_string())),
        }
    }
}
