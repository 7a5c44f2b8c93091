// Read access to the three incoming event feeds.
//
// Every call returns the whole feed in storage order. An empty feed is a
// valid result.

use crate::modules::shipments::core::feeds::{CarrierEvent, EdgeSensorEvent, EmailEvent};
use async_trait::async_trait;

#[async_trait]
pub trait EventFeedQueries {
    async fn carrier_events(&self) -> Vec<CarrierEvent>;
    async fn edge_events(&self) -> Vec<EdgeSensorEvent>;
    async fn email_events(&self) -> Vec<EmailEvent>;
}
