use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::accounts::use_cases::update_profile_settings::handler::ProfileSettingsError;
use crate::shell::caller::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct InstagramBody {
    #[serde(default)]
    pub instagram_username: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(error: ProfileSettingsError) -> axum::response::Response {
    let status = match &error {
        ProfileSettingsError::AccessDenied => StatusCode::FORBIDDEN,
        ProfileSettingsError::NotFound(_) => StatusCode::NOT_FOUND,
        ProfileSettingsError::InvalidUsername(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ProfileSettingsError::Persistence(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn settings(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    match state.profile_settings_handler.settings(caller.session()).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_instagram(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<InstagramBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .profile_settings_handler
        .update_instagram_username(caller.session(), body.instagram_username.as_deref())
        .await
    {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => error_response(e),
    }
}
