use crate::modules::accounts::core::session::SessionToken;
use crate::modules::appointments::core::availability::SlotTemplate;
use crate::shell::state::{AppState, Backends};

pub const CLIENT_EMAIL: &str = "cliente@example.com";
pub const ADMIN_EMAIL: &str = "studio@example.com";
pub const PASSWORD: &str = "maquillaje-2026";

pub fn test_template() -> SlotTemplate {
    SlotTemplate::parse("09:00,10:00,11:00").unwrap()
}

pub fn make_test_state(backends: &Backends) -> AppState {
    AppState::new(test_template(), backends)
}

/// `Authorization` header value for a token.
pub fn bearer(token: &SessionToken) -> String {
    format!("Bearer {token}")
}

/// State plus the token of a freshly registered client.
pub async fn make_client_state(backends: &Backends) -> (AppState, SessionToken) {
    let state = make_test_state(backends);
    let signed = state
        .gate
        .register(None, CLIENT_EMAIL, PASSWORD, Some("+50370000000"))
        .await
        .unwrap();
    (state, signed.token)
}

/// State plus the token of a seeded admin.
pub async fn make_admin_state(backends: &Backends) -> (AppState, SessionToken) {
    backends.seed_admin(ADMIN_EMAIL, PASSWORD).await.unwrap();
    let state = make_test_state(backends);
    let signed = state
        .gate
        .login(None, ADMIN_EMAIL, PASSWORD)
        .await
        .unwrap();
    (state, signed.token)
}
