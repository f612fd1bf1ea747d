use axum::{extract::State, response::Json};
use roster_model::CatalogItem;
use tracing::info;

use crate::infra::{app_state::AppState, errors::AppResult};

/// Return the entire catalog table in store order.
pub async fn list_catalog_items_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let items = state.catalog().list_items().await?;
    info!(count = items.len(), "serving catalog listing");
    Ok(Json(items))
}
