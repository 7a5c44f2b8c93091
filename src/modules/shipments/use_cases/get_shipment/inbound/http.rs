use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::shipments::use_cases::get_shipment::handler::GetShipmentError;
use crate::shell::state::AppState;

impl IntoResponse for GetShipmentError {
    fn into_response(self) -> Response {
        let status = match self {
            GetShipmentError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        // serde_json takes care of escaping whatever the caller put in the path.
        let body = serde_json::json!({ "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(shipment_id): Path<String>,
) -> Result<impl IntoResponse, GetShipmentError> {
    let shipment = state.get_shipment.handle(&shipment_id).await?;
    Ok(Json(shipment))
}

#[cfg(test)]
mod get_shipment_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::shipments::adapters::outbound::fixture_store::FixtureStore;
    use crate::shell::state::AppState;

    use super::handle;

    #[fixture]
    fn before_each() -> Router {
        let state = AppState::from_store(Arc::new(FixtureStore::with_default_fixtures().unwrap()));
        Router::new()
            .route("/api/shipments/{shipment_id}", get(handle))
            .with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_200_with_the_shipment(before_each: Router) {
        let (status, json) = get_json(before_each, "/api/shipments/SHP-20250210-0042").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["shipment_id"], "SHP-20250210-0042");
        assert_eq!(json["status"], "in_transit");
        assert_eq!(json["carrier"], "MAEU");
        assert_eq!(json["container_id"], "MSKU1234567");
        assert_eq!(json["origin"], json!({ "port": "CNSHA", "country": "CN" }));
        assert_eq!(json["destination"], json!({ "port": "GBFXT", "country": "GB" }));
        assert_eq!(json["eta"], "2025-03-15T08:00:00Z");
        assert_eq!(json["last_updated"], "2025-02-10T09:15:00Z");
        assert_eq!(json["events"].as_array().unwrap().len(), 2);
        assert!(json["events"][0].get("location").is_none());
        assert_eq!(json["events"][1]["location"], json!({ "lat": 30.5, "lon": 122.1 }));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_with_a_message_when_the_shipment_is_unknown(
        before_each: Router,
    ) {
        let (status, json) = get_json(before_each, "/api/shipments/INVALID-ID").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "message": "Shipment INVALID-ID not found" }));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_treat_identifiers_as_case_sensitive(before_each: Router) {
        let (status, json) = get_json(before_each, "/api/shipments/shp-20250210-0042").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Shipment shp-20250210-0042 not found");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_escape_the_identifier_inside_the_message(before_each: Router) {
        let response = before_each
            .oneshot(
                Request::get("/api/shipments/a%22b%5Cc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"message":"Shipment a\"b\\c not found"}"#);
    }
}
