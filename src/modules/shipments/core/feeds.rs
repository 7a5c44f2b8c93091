// Incoming event feeds as seen by downstream consumers.
//
// Each feed has its own flat shape. `shipment_id` on carrier events and
// `shipment_ref` on email events point at a shipment by convention only;
// nothing checks that the shipment exists.

use crate::shared::core::primitives::{Timestamp, iso8601, iso8601_option};
use serde::{Deserialize, Serialize};

pub const CARRIER_CDC_SOURCE: &str = "carrier_cdc";
pub const EDGE_SENSOR_SOURCE: &str = "edge_sensor";
pub const EMAIL_PARSER_SOURCE: &str = "email_parser";

/// Carrier status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierEvent {
    pub source: String,
    pub shipment_id: String,
    pub status: String,
    #[serde(with = "iso8601")]
    pub timestamp: Timestamp,
    pub port: String,
}

impl CarrierEvent {
    pub fn new(
        shipment_id: impl Into<String>,
        status: impl Into<String>,
        timestamp: Timestamp,
        port: impl Into<String>,
    ) -> Self {
        Self {
            source: CARRIER_CDC_SOURCE.to_string(),
            shipment_id: shipment_id.into(),
            status: status.into(),
            timestamp,
            port: port.into(),
        }
    }
}

/// Telemetry reading from a container mounted sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSensorEvent {
    pub source: String,
    pub device_id: String,
    pub container_id: String,
    #[serde(with = "iso8601")]
    pub timestamp: Timestamp,
    pub lat: f64,
    pub lon: f64,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl EdgeSensorEvent {
    pub fn new(
        device_id: impl Into<String>,
        container_id: impl Into<String>,
        timestamp: Timestamp,
        (lat, lon): (f64, f64),
        temperature: f64,
    ) -> Self {
        Self {
            source: EDGE_SENSOR_SOURCE.to_string(),
            device_id: device_id.into(),
            container_id: container_id.into(),
            timestamp,
            lat,
            lon,
            temperature,
        }
    }
}

/// Status extracted from an inbound email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailEvent {
    pub source: String,
    pub shipment_ref: String,
    pub status: String,
    /// `None` when the parser found no usable time in the message.
    #[serde(with = "iso8601_option", default)]
    pub timestamp: Option<Timestamp>,
    pub notes: String,
}

impl EmailEvent {
    pub fn new(
        shipment_ref: impl Into<String>,
        status: impl Into<String>,
        timestamp: Option<Timestamp>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            source: EMAIL_PARSER_SOURCE.to_string(),
            shipment_ref: shipment_ref.into(),
            status: status.into(),
            timestamp,
            notes: notes.into(),
        }
    }
}
