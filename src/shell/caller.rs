use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use std::convert::Infallible;

use crate::modules::accounts::core::session::{Session, SessionToken};
use crate::shell::state::AppState;

/// Whoever sent the request: the bearer token they presented, if any, and
/// the session it resolves to. A missing or unknown token yields an
/// anonymous caller; use cases decide what anonymous callers may do.
#[derive(Debug, Clone, Default)]
pub struct Caller {
    pub token: Option<SessionToken>,
    pub session: Option<Session>,
}

impl Caller {
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    SessionToken::parse(token)
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers);
        let session = match &token {
            Some(token) => state.gate.resolve(token).await,
            None => None,
        };
        Ok(Self { token, session })
    }
}
