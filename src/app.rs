use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/symptoms", get(handlers::get_symptoms))
        .route("/api/medication", get(handlers::get_medication))
        .route("/api/notifications", get(handlers::get_notifications))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/routes", get(handlers::get_routes))
        .route("/api/calendar", get(handlers::get_calendar))
        .fallback(handlers::screen)
        .with_state(state)
}
