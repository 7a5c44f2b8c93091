// In memory fixture store.
//
// Purpose
// - Serve a fixed dataset built once at startup.
//
// Responsibilities
// - Own the shipment list and the three event feeds.
// - Refuse shipments with an empty or repeated identifier.
// - Answer lookups with an exact, case sensitive identifier match.
//
// The collections are never mutated after construction, so the store can be
// shared behind an `Arc` and read concurrently without locking.

use crate::modules::shipments::adapters::outbound::fixture_data;
use crate::modules::shipments::core::feeds::{CarrierEvent, EdgeSensorEvent, EmailEvent};
use crate::modules::shipments::core::shipment::ShipmentRecord;
use crate::modules::shipments::use_cases::get_shipment::queries_port::ShipmentQueries;
use crate::modules::shipments::use_cases::list_event_feeds::queries_port::EventFeedQueries;
use crate::shared::core::primitives::InvalidTimestamp;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureStoreError {
    #[error("shipment at position {position} has an empty identifier")]
    EmptyShipmentId { position: usize },

    #[error("shipment identifier {shipment_id} appears more than once")]
    DuplicateShipmentId { shipment_id: String },

    #[error(transparent)]
    InvalidTimestamp(#[from] InvalidTimestamp),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    shipments: Vec<ShipmentRecord>,
    carrier_events: Vec<CarrierEvent>,
    edge_events: Vec<EdgeSensorEvent>,
    email_events: Vec<EmailEvent>,
}

impl FixtureStore {
    pub fn new(
        shipments: Vec<ShipmentRecord>,
        carrier_events: Vec<CarrierEvent>,
        edge_events: Vec<EdgeSensorEvent>,
        email_events: Vec<EmailEvent>,
    ) -> Result<Self, FixtureStoreError> {
        let mut seen = HashSet::with_capacity(shipments.len());
        for (position, shipment) in shipments.iter().enumerate() {
            if shipment.shipment_id.is_empty() {
                return Err(FixtureStoreError::EmptyShipmentId { position });
            }
            if !seen.insert(shipment.shipment_id.as_str()) {
                return Err(FixtureStoreError::DuplicateShipmentId {
                    shipment_id: shipment.shipment_id.clone(),
                });
            }
        }

        Ok(Self {
            shipments,
            carrier_events,
            edge_events,
            email_events,
        })
    }

    pub fn with_default_fixtures() -> Result<Self, FixtureStoreError> {
        Self::new(
            fixture_data::shipments()?,
            fixture_data::carrier_events()?,
            fixture_data::edge_events()?,
            fixture_data::email_events(),
        )
    }

    /// First shipment whose identifier equals `shipment_id` byte for byte.
    pub fn get_shipment(&self, shipment_id: &str) -> Option<&ShipmentRecord> {
        self.shipments
            .iter()
            .find(|shipment| shipment.shipment_id == shipment_id)
    }

    pub fn list_carrier_events(&self) -> &[CarrierEvent] {
        &self.carrier_events
    }

    pub fn list_edge_events(&self) -> &[EdgeSensorEvent] {
        &self.edge_events
    }

    pub fn list_email_events(&self) -> &[EmailEvent] {
        &self.email_events
    }
}

#[async_trait::async_trait]
impl ShipmentQueries for FixtureStore {
    async fn get_by_id(&self, shipment_id: &str) -> Option<ShipmentRecord> {
        self.get_shipment(shipment_id).cloned()
    }
}

#[async_trait::async_trait]
impl EventFeedQueries for FixtureStore {
    async fn carrier_events(&self) -> Vec<CarrierEvent> {
        self.list_carrier_events().to_vec()
    }

    async fn edge_events(&self) -> Vec<EdgeSensorEvent> {
        self.list_edge_events().to_vec()
    }

    async fn email_events(&self) -> Vec<EmailEvent> {
        self.list_email_events().to_vec()
    }
}
