use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{BookingDate, Slot};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AvailableSlotsParams {
    pub date: String,
}

#[derive(Serialize)]
pub struct AvailableSlotsResponse {
    pub date: BookingDate,
    pub slots: Vec<Slot>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AvailableSlotsParams>,
) -> impl IntoResponse {
    let date = match params.date.trim().parse::<BookingDate>() {
        Ok(date) => date,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state.list_slots_handler.handle(date).await {
        Ok(slots) => Json(AvailableSlotsResponse { date, slots }).into_response(),
        Err(e) => {
            tracing::error!(%date, error = %e, "could not load availability");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
