use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list))
        .route("/search", post(artist::search))
        .route("/create", get(artist::new_form).post(artist::create))
        .route("/{id}", get(artist::detail))
        .route(
            "/{id}/edit",
            get(artist::edit_form).post(artist::edit_submit),
        )
}
