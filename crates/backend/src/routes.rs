use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;

/// All API routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Event
        // ========================================
        .route("/events", get(handlers::a001_event::list_all))
        .route("/events/add", post(handlers::a001_event::add))
        .route("/events/update", post(handlers::a001_event::update))
        .route("/delete_log/:id", delete(handlers::a001_event::delete_log))
        // legacy create endpoint, superseded by /events/add
        .route("/add_log", post(handlers::a001_event::add_log))
}
