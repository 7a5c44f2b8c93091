use crate::modules::shipments::core::shipment::ShipmentRecord;
use crate::modules::shipments::use_cases::get_shipment::queries_port::ShipmentQueries;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetShipmentError {
    #[error("Shipment {shipment_id} not found")]
    NotFound { shipment_id: String },
}

pub struct GetShipmentHandler<TQueries>
where
    TQueries: ShipmentQueries + Send + Sync + ?Sized,
{
    queries: Arc<TQueries>,
}

impl<TQueries> GetShipmentHandler<TQueries>
where
    TQueries: ShipmentQueries + Send + Sync + ?Sized,
{
    pub fn new(queries: Arc<TQueries>) -> Self {
        Self { queries }
    }

    /// Passes the identifier through untouched; any string that matches no
    /// shipment, including the empty one, yields `NotFound`.
    pub async fn handle(&self, shipment_id: &str) -> Result<ShipmentRecord, GetShipmentError> {
        match self.queries.get_by_id(shipment_id).await {
            Some(shipment) => {
                tracing::debug!(shipment_id, "shipment found");
                Ok(shipment)
            }
            None => {
                tracing::debug!(shipment_id, "shipment not found");
                Err(GetShipmentError::NotFound {
                    shipment_id: shipment_id.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod get_shipment_handler_tests {
    use super::*;
    use crate::modules::shipments::adapters::outbound::fixture_data::EXAMPLE_SHIPMENT_ID;
    use crate::modules::shipments::adapters::outbound::fixture_store::FixtureStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> GetShipmentHandler<FixtureStore> {
        GetShipmentHandler::new(Arc::new(FixtureStore::with_default_fixtures().unwrap()))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_matching_shipment(before_each: GetShipmentHandler<FixtureStore>) {
        let shipment = before_each
            .handle(EXAMPLE_SHIPMENT_ID)
            .await
            .expect("handle failed");

        assert_eq!(shipment.shipment_id, EXAMPLE_SHIPMENT_ID);
        assert_eq!(shipment.events.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_requested_identifier_when_not_found(
        before_each: GetShipmentHandler<FixtureStore>,
    ) {
        let result = before_each.handle("INVALID-ID").await;

        assert_eq!(
            result,
            Err(GetShipmentError::NotFound {
                shipment_id: "INVALID-ID".to_string()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Shipment INVALID-ID not found"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_work_behind_a_trait_object() {
        let queries: Arc<dyn ShipmentQueries + Send + Sync> =
            Arc::new(FixtureStore::with_default_fixtures().unwrap());
        let handler = GetShipmentHandler::new(queries);

        assert!(handler.handle(EXAMPLE_SHIPMENT_ID).await.is_ok());
        assert!(handler.handle("").await.is_err());
    }
}
