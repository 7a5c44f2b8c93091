// Shipment tracking contract returned by the lookup endpoint.
//
// Field names are part of the public JSON contract and stay snake_case.
// Events are kept in insertion order, which by convention is chronological.

use crate::shared::core::primitives::{Timestamp, iso8601};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub shipment_id: String,
    pub status: String,
    pub origin: Location,
    pub destination: Location,
    pub carrier: String,
    pub container_id: String,
    pub events: Vec<ShipmentEvent>,
    #[serde(with = "iso8601")]
    pub eta: Timestamp,
    #[serde(with = "iso8601")]
    pub last_updated: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub port: String,
    pub country: String,
}

impl Location {
    pub fn new(port: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            country: country.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentEvent {
    #[serde(with = "iso8601")]
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: String,
    /// Absent for events without a position, e.g. a pure status change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

/// Coordinates in floating point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}
