use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use roster_model::api::routes::{HEALTH, PING};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, infra::app_state::AppState, routes};

/// Assemble the full application router.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state);

    Router::new()
        .route(PING, get(handlers::ping_handler))
        .route(HEALTH, get(handlers::health_handler))
        .merge(routes::create_api_router())
        .fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

// Permissive in dev, allow-list otherwise; an empty list allows any origin.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    if state.config().dev_mode {
        return CorsLayer::permissive();
    }

    let origins = &state.config().cors.allowed_origins;
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*")
    {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
