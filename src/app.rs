use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits/add", post(handlers::add_habit_form))
        .route("/habits/:id/toggle", post(handlers::toggle_habit_form))
        .route("/habits/:id/delete", post(handlers::delete_habit_form))
        .route("/api/habits", get(handlers::list_habits).post(handlers::add_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/pending", get(handlers::get_pending))
        .with_state(state)
}
