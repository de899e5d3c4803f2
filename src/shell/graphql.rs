use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::appointments::use_cases::list_available_slots::inbound::graphql::AvailableSlotsQuery;
use crate::modules::appointments::use_cases::submit_booking::inbound::graphql::SubmitBookingMutation;
use crate::modules::catalog::use_cases::list_services::inbound::graphql::ServicesQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AvailableSlotsQuery, ServicesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitBookingMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
