use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::appointments::use_cases::submit_booking::decision::BookingError;
use crate::modules::appointments::use_cases::submit_booking::request::AppointmentRequest;
use crate::shell::caller::Caller;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmitBookingResponse {
    pub appointment_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn status_of(error: &BookingError) -> StatusCode {
    match error {
        BookingError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        BookingError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::SlotUnavailable { .. } => StatusCode::CONFLICT,
        BookingError::PersistenceFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<AppointmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .submit_booking_handler
        .handle(caller.session(), request)
        .await
    {
        Ok(id) => (
            StatusCode::CREATED,
            Json(SubmitBookingResponse {
                appointment_id: id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            status_of(&e),
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
