// Canned dataset loaded at startup.
//
// The carrier, edge and email events all describe the single shipment below
// so that demo clients can correlate them.

use crate::modules::shipments::core::feeds::{CarrierEvent, EdgeSensorEvent, EmailEvent};
use crate::modules::shipments::core::shipment::{
    GeoLocation, Location, ShipmentEvent, ShipmentRecord,
};
use crate::shared::core::primitives::{InvalidTimestamp, utc_timestamp};

pub const EXAMPLE_SHIPMENT_ID: &str = "SHP-20250210-0042";
const EXAMPLE_CONTAINER_ID: &str = "MSKU1234567";

pub fn shipments() -> Result<Vec<ShipmentRecord>, InvalidTimestamp> {
    Ok(vec![ShipmentRecord {
        shipment_id: EXAMPLE_SHIPMENT_ID.to_string(),
        status: "in_transit".to_string(),
        origin: Location::new("CNSHA", "CN"),
        destination: Location::new("GBFXT", "GB"),
        carrier: "MAEU".to_string(),
        container_id: EXAMPLE_CONTAINER_ID.to_string(),
        events: vec![
            ShipmentEvent {
                timestamp: utc_timestamp(2025, 2, 8, 14, 30, 0)?,
                event_type: "departure".to_string(),
                source: "carrier_api".to_string(),
                location: None,
            },
            ShipmentEvent {
                timestamp: utc_timestamp(2025, 2, 10, 9, 15, 0)?,
                event_type: "location_update".to_string(),
                source: "edge_sensor".to_string(),
                location: Some(GeoLocation {
                    lat: 30.5,
                    lon: 122.1,
                }),
            },
        ],
        eta: utc_timestamp(2025, 3, 15, 8, 0, 0)?,
        last_updated: utc_timestamp(2025, 2, 10, 9, 15, 0)?,
    }])
}

pub fn carrier_events() -> Result<Vec<CarrierEvent>, InvalidTimestamp> {
    Ok(vec![CarrierEvent::new(
        EXAMPLE_SHIPMENT_ID,
        "in_transit",
        utc_timestamp(2025, 2, 8, 14, 30, 0)?,
        "CNSHA",
    )])
}

pub fn edge_events() -> Result<Vec<EdgeSensorEvent>, InvalidTimestamp> {
    Ok(vec![EdgeSensorEvent::new(
        "EDGE-4491",
        EXAMPLE_CONTAINER_ID,
        utc_timestamp(2025, 2, 10, 9, 15, 0)?,
        (30.5, 122.1),
        4.2,
    )])
}

pub fn email_events() -> Vec<EmailEvent> {
    vec![EmailEvent::new(
        EXAMPLE_SHIPMENT_ID,
        "delayed",
        None,
        "Vessel delayed due to weather",
    )]
}

#[cfg(test)]
mod fixture_data_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn it_should_load_one_record_per_collection() {
        assert_eq!(shipments().unwrap().len(), 1);
        assert_eq!(carrier_events().unwrap().len(), 1);
        assert_eq!(edge_events().unwrap().len(), 1);
        assert_eq!(email_events().len(), 1);
    }

    #[rstest]
    fn it_should_give_every_shipment_a_non_empty_unique_identifier() {
        let shipments = shipments().unwrap();

        let identifiers: HashSet<&str> = shipments
            .iter()
            .map(|shipment| shipment.shipment_id.as_str())
            .collect();

        assert_eq!(identifiers.len(), shipments.len());
        assert!(identifiers.iter().all(|shipment_id| !shipment_id.is_empty()));
    }

    #[rstest]
    fn it_should_keep_the_shipment_events_in_chronological_order() {
        let shipment = &shipments().unwrap()[0];

        assert_eq!(shipment.events.len(), 2);
        assert!(shipment.events[0].timestamp < shipment.events[1].timestamp);
        assert_eq!(shipment.events[0].location, None);
        assert_eq!(
            shipment.events[1].location,
            Some(GeoLocation {
                lat: 30.5,
                lon: 122.1
            })
        );
    }

    #[rstest]
    fn it_should_correlate_feeds_with_the_example_shipment() {
        assert_eq!(carrier_events().unwrap()[0].shipment_id, EXAMPLE_SHIPMENT_ID);
        assert_eq!(email_events()[0].shipment_ref, EXAMPLE_SHIPMENT_ID);
        assert_eq!(
            edge_events().unwrap()[0].container_id,
            shipments().unwrap()[0].container_id
        );
    }
}
