pub mod admin;
pub mod catalog;

use axum::{routing::get, Router};

use crate::db::AppState;

/// JSON API mirroring the server functions, for non-UI clients.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(crate::health::health_check))
        .route("/api/admin/destination", get(admin::admin_destination))
        .route("/api/suggestions", get(catalog::suggestions))
        .route("/api/contributors", get(catalog::contributors))
        .route("/api/collections", get(catalog::search_collection))
}
