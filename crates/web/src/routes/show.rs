use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list))
        .route("/create", get(show::new_form).post(show::create))
}
