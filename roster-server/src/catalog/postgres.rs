use async_trait::async_trait;
use roster_model::CatalogItem;
use sqlx::PgPool;
use once_cell::sync::Lazy;
use tracing::debug;

use super::{CatalogRepository, Result};

// Ordered by the surrogate key so reloads see the same sequence.
static LIST_ITEMS_SQL: Lazy<String> = Lazy::new(|| {
    format!(
        "SELECT {} FROM catalog_items ORDER BY id",
        CatalogItem::COLUMNS.join(", ")
    )
});

#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_items(&self) -> Result<Vec<CatalogItem>> {
        let items = sqlx::query_as::<_, CatalogItem>(LIST_ITEMS_SQL.as_str())
            .fetch_all(self.pool())
            .await?;

        debug!(count = items.len(), "catalog rows fetched");
        Ok(items)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }
}
