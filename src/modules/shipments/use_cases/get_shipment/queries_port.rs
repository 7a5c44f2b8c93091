use crate::modules::shipments::core::shipment::ShipmentRecord;
use async_trait::async_trait;

/// Lookup of a single shipment by its exact identifier.
///
/// `None` is a regular outcome meaning no shipment carries that identifier.
#[async_trait]
pub trait ShipmentQueries {
    async fn get_by_id(&self, shipment_id: &str) -> Option<ShipmentRecord>;
}
