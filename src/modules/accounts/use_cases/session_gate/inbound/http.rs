use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::accounts::core::errors::AuthError;
use crate::modules::accounts::core::session::Session;
use crate::shell::caller::Caller;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct ChangePasswordBody {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(error: AuthError) -> axum::response::Response {
    let status = match &error {
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::AccessDenied => StatusCode::FORBIDDEN,
        AuthError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::ProfileLookupFailed(_) | AuthError::Unknown(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn login(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .gate
        .login(caller.token(), &body.email, &body.password)
        .await
    {
        Ok(signed) => Json(signed).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn register(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<RegisterBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .gate
        .register(
            caller.token(),
            &body.email,
            &body.password,
            body.phone.as_deref(),
        )
        .await
    {
        Ok(signed) => (StatusCode::CREATED, Json(signed)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn logout(State(state): State<AppState>, caller: Caller) -> impl IntoResponse {
    Json(state.gate.logout(caller.token()).await)
}

pub async fn change_password(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<ChangePasswordBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .gate
        .change_password(caller.token(), &body.old_password, &body.new_password)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn session(caller: Caller) -> impl IntoResponse {
    Json(SessionResponse {
        session: caller.session,
    })
}
