use axum::{routing::get, routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{health, root},
        inventory::{add_item, delete_item, get_item, list_items, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Any origin, method and header, with credentials. A literal `*` cannot be
    // combined with credentials, so the request values are mirrored back.
    let cors = CorsLayer::very_permissive();

    let api_routes = Router::new()
        .route("/inventory", get(list_items))
        .route("/inventory/add", post(add_item))
        .route(
            "/inventory/{id}",
            get(get_item).put(update_item).delete(delete_item),
        );

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
