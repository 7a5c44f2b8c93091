use crate::modules::shipments::adapters::outbound::fixture_store::FixtureStore;
use crate::modules::shipments::use_cases::get_shipment::handler::GetShipmentHandler;
use crate::modules::shipments::use_cases::get_shipment::queries_port::ShipmentQueries;
use crate::modules::shipments::use_cases::list_event_feeds::queries_port::EventFeedQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_shipment: Arc<GetShipmentHandler<dyn ShipmentQueries + Send + Sync>>,
    pub feeds: Arc<dyn EventFeedQueries + Send + Sync>,
}

impl AppState {
    /// Wires every use case to the same immutable store.
    pub fn from_store(store: Arc<FixtureStore>) -> Self {
        let shipments: Arc<dyn ShipmentQueries + Send + Sync> = store.clone();
        Self {
            get_shipment: Arc::new(GetShipmentHandler::new(shipments)),
            feeds: store,
        }
    }
}
