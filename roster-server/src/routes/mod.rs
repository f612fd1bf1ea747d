pub mod v1;

use crate::{handlers, infra::app_state::AppState};
use axum::{Router, routing::get};
use roster_model::api::routes::{legacy, v1::ROOT};

/// Create the main API router with all versions
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest(ROOT, v1::create_v1_router())
        // Route name used by deployments that predate versioning
        .route(
            legacy::LEGENDS,
            get(handlers::list_catalog_items_handler),
        )
}
