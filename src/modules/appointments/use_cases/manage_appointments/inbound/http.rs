use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::appointments::core::update::AppointmentUpdate;
use crate::modules::appointments::use_cases::manage_appointments::handler::ManageAppointmentsError;
use crate::shell::caller::Caller;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(error: ManageAppointmentsError) -> axum::response::Response {
    let status = match &error {
        ManageAppointmentsError::AccessDenied => StatusCode::FORBIDDEN,
        ManageAppointmentsError::NotFound(_) => StatusCode::NOT_FOUND,
        ManageAppointmentsError::InvalidTransition(_) => StatusCode::CONFLICT,
        ManageAppointmentsError::InvalidUpdate(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ManageAppointmentsError::Persistence(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn list(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    match state.manage_appointments_handler.list(caller.session()).await {
        Ok(appointments) => Json(appointments).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    body: Result<Json<AppointmentUpdate>, JsonRejection>,
) -> impl IntoResponse {
    // Unknown fields fail here, before the handler sees the update.
    let Json(update) = match body {
        Ok(b) => b,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: e.body_text(),
                }),
            )
                .into_response();
        }
    };

    match state
        .manage_appointments_handler
        .update(caller.session(), id, update)
        .await
    {
        Ok(appointment) => Json(appointment).into_response(),
        Err(e) => error_response(e),
    }
}
