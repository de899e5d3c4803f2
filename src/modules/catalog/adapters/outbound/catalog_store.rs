use crate::modules::catalog::core::service::ServiceRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find(&self, service_id: &str) -> Result<Option<ServiceRecord>, CatalogError>;
    async fn list_active(&self) -> Result<Vec<ServiceRecord>, CatalogError>;
}
