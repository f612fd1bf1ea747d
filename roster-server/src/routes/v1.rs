use axum::{Router, routing::get};
use roster_model::api::routes::{relative_to_v1, v1};

use crate::{handlers, infra::app_state::AppState};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route(
        relative_to_v1(v1::catalog::ITEMS),
        get(handlers::list_catalog_items_handler),
    )
}
