use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::shipments::adapters::outbound::fixture_data::EXAMPLE_SHIPMENT_ID;
use crate::modules::shipments::use_cases::get_shipment::inbound::http as get_shipment_http;
use crate::modules::shipments::use_cases::list_event_feeds::inbound::http as feeds_http;
use crate::shell::state::AppState;

const ENDPOINTS: [&str; 4] = [
    "GET /api/shipments/{shipment_id} - Get shipment details",
    "GET /api/shipments/events/carrier - Get carrier CDC events",
    "GET /api/shipments/events/edge - Get edge sensor events",
    "GET /api/shipments/events/email - Get email parser events",
];

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: [&'static str; 4],
    pub example: String,
}

pub async fn index() -> impl IntoResponse {
    Json(IndexResponse {
        message: "Shipment Mock API",
        endpoints: ENDPOINTS,
        example: format!("/api/shipments/{EXAMPLE_SHIPMENT_ID}"),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/shipments/{shipment_id}", get(get_shipment_http::handle))
        .route("/api/shipments/events/carrier", get(feeds_http::handle_carrier))
        .route("/api/shipments/events/edge", get(feeds_http::handle_edge))
        .route("/api/shipments/events/email", get(feeds_http::handle_email))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
