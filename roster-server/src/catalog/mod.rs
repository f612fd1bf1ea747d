//! Catalog store access.

pub mod postgres;

use async_trait::async_trait;
use roster_model::CatalogItem;
use thiserror::Error;

pub use postgres::PostgresCatalogRepository;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only port onto the catalog table.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Every row, in store order.
    async fn list_items(&self) -> Result<Vec<CatalogItem>>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}
