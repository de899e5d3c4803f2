use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, patch, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::session_gate::inbound::http as auth_http;
use crate::modules::accounts::use_cases::update_profile_settings::inbound::http as settings_http;
use crate::modules::appointments::use_cases::list_available_slots::inbound::http as slots_http;
use crate::modules::appointments::use_cases::manage_appointments::inbound::http as admin_http;
use crate::modules::appointments::use_cases::submit_booking::inbound::http as booking_http;
use crate::modules::catalog::use_cases::list_services::inbound::http as services_http;
use crate::shell::caller::Caller;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .route("/auth/login", post(auth_http::login))
        .route("/auth/register", post(auth_http::register))
        .route("/auth/logout", post(auth_http::logout))
        .route("/auth/password", post(auth_http::change_password))
        .route("/auth/session", get(auth_http::session))
        .route("/services", get(services_http::handle))
        .route("/available-slots", get(slots_http::handle))
        .route("/bookings", post(booking_http::handle))
        .route("/admin/appointments", get(admin_http::list))
        .route("/admin/appointments/{id}", patch(admin_http::update))
        .route("/admin/settings", get(settings_http::settings))
        .route("/admin/settings/instagram", put(settings_http::update_instagram))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    caller: Caller,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(caller)).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
