use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

/// Active services, as offered on the booking form.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list_active().await {
        Ok(services) => Json(services).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "could not load the service catalog");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
