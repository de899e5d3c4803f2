use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::catalog::core::service::ServiceRecord;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlService {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    pub duration_minutes: u32,
    pub thumbnail_url: Option<String>,
}

impl From<ServiceRecord> for GqlService {
    fn from(s: ServiceRecord) -> Self {
        Self {
            id: s.id,
            name: s.name,
            slug: s.slug,
            description: s.description,
            price: s.price,
            duration_minutes: s.duration_minutes,
            thumbnail_url: s.thumbnail_url,
        }
    }
}

#[derive(Default)]
pub struct ServicesQuery;

#[Object]
impl ServicesQuery {
    async fn services(&self, context: &Context<'_>) -> GqlResult<Vec<GqlService>> {
        let state = context.data_unchecked::<AppState>();
        let services = state.catalog.list_active().await?;
        Ok(services.into_iter().map(Into::into).collect())
    }
}
