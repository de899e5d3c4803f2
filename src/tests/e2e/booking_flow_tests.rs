use crate::modules::accounts::adapters::outbound::session_storage_file::JsonFileSessionStorage;
use crate::modules::accounts::core::session::{Role, SessionToken};
use crate::modules::appointments::adapters::outbound::appointment_store::AppointmentStore;
use crate::modules::appointments::core::appointment::AppointmentStatus;
use crate::modules::appointments::core::update::AppointmentUpdate;
use crate::modules::appointments::use_cases::submit_booking::decision::BookingError;
use crate::shared::core::primitives::BookingDate;
use crate::shell::http::router;
use crate::shell::state::Backends;
use crate::tests::fixtures::requests::AppointmentRequestBuilder;
use crate::tests::fixtures::state::{
    ADMIN_EMAIL, CLIENT_EMAIL, PASSWORD, bearer, make_client_state, make_test_state,
};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn day() -> BookingDate {
    "2026-03-01".parse().unwrap()
}

fn render(slots: &[crate::shared::core::primitives::Slot]) -> Vec<String> {
    slots.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn a_stale_slot_picker_loses_to_an_earlier_booking_and_an_admin_frees_it() {
    let backends = Backends::in_memory();
    let (state, ana_token) = make_client_state(&backends).await;
    let ana = state.gate.resolve(&ana_token).await.unwrap();

    // Ana renders the picker.
    let snapshot = state.list_slots_handler.handle(day()).await.unwrap();
    assert_eq!(render(&snapshot), vec!["09:00", "10:00", "11:00"]);

    // Lucía, signed in at the same time, books 10:00 in the meantime.
    let lucia = state
        .gate
        .register(None, "lucia@example.com", PASSWORD, None)
        .await
        .unwrap();
    state
        .submit_booking_handler
        .handle(
            Some(&lucia.session),
            AppointmentRequestBuilder::new().slot("10:00").build(),
        )
        .await
        .unwrap();

    let result = state
        .submit_booking_handler
        .handle(
            Some(&ana),
            AppointmentRequestBuilder::new().slot("10:00").build(),
        )
        .await;
    assert!(matches!(result, Err(BookingError::SlotUnavailable { .. })));

    let refreshed = state.list_slots_handler.handle(day()).await.unwrap();
    assert_eq!(render(&refreshed), vec!["09:00", "11:00"]);

    // The studio signs in alongside both clients and cancels Lucía's booking.
    backends.seed_admin(ADMIN_EMAIL, PASSWORD).await.unwrap();
    let admin = state.gate.login(None, ADMIN_EMAIL, PASSWORD).await.unwrap();
    assert_eq!(admin.session.role, Some(Role::Admin));
    assert_eq!(state.gate.active_sessions().await, 3);

    let appointments = state
        .manage_appointments_handler
        .list(Some(&admin.session))
        .await
        .unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].user_id, lucia.session.user_id);
    state
        .manage_appointments_handler
        .update(
            Some(&admin.session),
            appointments[0].id,
            AppointmentUpdate::status(AppointmentStatus::Cancelled),
        )
        .await
        .unwrap();

    // And Ana, still signed in, gets the slot after all.
    let ana = state.gate.resolve(&ana_token).await.unwrap();
    let id = state
        .submit_booking_handler
        .handle(
            Some(&ana),
            AppointmentRequestBuilder::new().slot("10:00").build(),
        )
        .await
        .unwrap();

    let all = state
        .manage_appointments_handler
        .list(Some(&admin.session))
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|a| a.id == id && a.user_id == ana.user_id));
}

#[tokio::test]
async fn persisted_sessions_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mut backends = Backends::in_memory();
    backends.sessions = Arc::new(JsonFileSessionStorage::new(dir.path().join("sessions.json")));

    let (before, token) = make_client_state(&backends).await;
    let session = before.gate.resolve(&token).await.unwrap();

    let after = make_test_state(&backends);
    assert_eq!(after.gate.rehydrate().await, 1);
    assert_eq!(after.gate.resolve(&token).await, Some(session));

    after.gate.logout(Some(&token)).await;
    let again = make_test_state(&backends);
    assert_eq!(again.gate.rehydrate().await, 0);
    assert_eq!(again.gate.resolve(&token).await, None);
}

async fn gql(app: axum::Router, token: Option<&SessionToken>, query: &str) -> serde_json::Value {
    let body = serde_json::json!({ "query": query }).to_string();
    let mut request = Request::post("/gql").header("content-type", "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, bearer(token));
    }
    let response = app
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn books_through_the_router_over_rest_and_graphql() {
    let backends = Backends::in_memory();
    let app = router(make_test_state(&backends));

    let register = serde_json::json!({
        "email": CLIENT_EMAIL,
        "password": PASSWORD,
        "phone": "+50370000000",
    });
    let response = app
        .clone()
        .oneshot(
            Request::post("/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(register.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let signed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let token = SessionToken::parse(signed["token"].as_str().unwrap()).unwrap();
    let user_id = signed["session"]["user_id"].as_str().unwrap().to_string();

    const BOOK_0900: &str = r#"mutation { submitBooking(date: "2026-03-01", slot: "09:00", serviceId: "bodas", customerName: "Ana Martínez", phone: "+50370000000") }"#;

    // Another caller gets nothing from the registered client's session.
    let anonymous = gql(app.clone(), None, BOOK_0900).await;
    assert!(anonymous["errors"].is_array(), "{anonymous}");
    assert_eq!(backends.appointments.insert_calls(), 0);

    let booked = gql(app.clone(), Some(&token), BOOK_0900).await;
    let id: uuid::Uuid = booked["data"]["submitBooking"].as_str().unwrap().parse().unwrap();
    let stored = backends.appointments.find(id).await.unwrap().unwrap();
    assert_eq!(stored.user_id, user_id);

    let listed = gql(
        app.clone(),
        None,
        r#"{ availableSlots(date: "2026-03-01") services { slug } }"#,
    )
    .await;
    assert_eq!(
        listed["data"]["availableSlots"],
        serde_json::json!(["10:00", "11:00"])
    );
    assert_eq!(listed["data"]["services"].as_array().unwrap().len(), 5);

    let denied = app
        .clone()
        .oneshot(
            Request::get("/admin/appointments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let as_client = app
        .oneshot(
            Request::get("/admin/appointments")
                .header(header::AUTHORIZATION, bearer(&token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(as_client.status(), StatusCode::FORBIDDEN);
}
