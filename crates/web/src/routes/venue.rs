use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue::list))
        .route("/search", post(venue::search))
        .route("/create", get(venue::new_form).post(venue::create))
        .route("/{id}", get(venue::detail).delete(venue::delete))
        .route("/{id}/edit", get(venue::edit_form).post(venue::edit_submit))
}
