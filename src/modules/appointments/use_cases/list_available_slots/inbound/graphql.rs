use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::core::primitives::BookingDate;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AvailableSlotsQuery;

#[Object]
impl AvailableSlotsQuery {
    /// Free `HH:MM` slots of one day, in template order.
    async fn available_slots(&self, context: &Context<'_>, date: String) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        let date = date.trim().parse::<BookingDate>()?;
        let slots = state.list_slots_handler.handle(date).await?;
        Ok(slots.into_iter().map(|s| s.to_string()).collect())
    }
}
