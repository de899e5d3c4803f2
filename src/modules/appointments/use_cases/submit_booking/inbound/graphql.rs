use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::appointments::use_cases::submit_booking::request::AppointmentRequest;
use crate::shell::caller::Caller;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitBookingMutation;

#[Object]
impl SubmitBookingMutation {
    async fn submit_booking(
        &self,
        context: &Context<'_>,
        date: String,
        slot: String,
        service_id: String,
        customer_name: String,
        phone: String,
        notes: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let request = AppointmentRequest {
            date,
            slot,
            service_id,
            customer_name,
            phone,
            notes,
        };

        // Attached per request by the `/gql` route; absent means anonymous.
        let session = context.data_opt::<Caller>().and_then(Caller::session);
        let id = state
            .submit_booking_handler
            .handle(session, request)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(id.to_string()))
    }
}
