use crate::modules::catalog::adapters::outbound::catalog_store::{CatalogError, CatalogStore};
use crate::modules::catalog::core::service::ServiceRecord;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalogStore {
    services: RwLock<Vec<ServiceRecord>>,
    offline: bool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(services: Vec<ServiceRecord>) -> Self {
        Self {
            services: RwLock::new(services),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), CatalogError> {
        if self.offline {
            return Err(CatalogError::Backend("Catalog store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn find(&self, service_id: &str) -> Result<Option<ServiceRecord>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .services
            .read()
            .await
            .iter()
            .find(|s| s.id == service_id)
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<ServiceRecord>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .services
            .read()
            .await
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }
}
