use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle_carrier(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.feeds.carrier_events().await)
}

pub async fn handle_edge(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.feeds.edge_events().await)
}

pub async fn handle_email(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.feeds.email_events().await)
}
