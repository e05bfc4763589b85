//! Handlers for the `/shows` pages.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::Form;
use encore_db::repositories::ShowRepo;

use crate::error::AppResult;
use crate::forms::ShowForm;
use crate::handlers::pages;
use crate::state::AppState;
use crate::views::{Flash, NewShowPage, ShowsPage};

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let shows = ShowRepo::list_all(&state.pool).await?;
    Ok(Html(ShowsPage { shows }.render()?))
}

/// GET /shows/create
pub async fn new_form() -> AppResult<Html<String>> {
    Ok(Html(NewShowPage.render()?))
}

/// POST /shows/create
///
/// Success and write failure alike re-render the home page with a flash
/// banner. A dangling artist or venue id fails the foreign-key check; the
/// statement is atomic, so a failure leaves the table unchanged.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> AppResult<Html<String>> {
    let input = match form.into_create() {
        Ok(input) => input,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected show submission");
            return pages::render_home(Some(Flash::error(
                "An error occurred. Show could not be listed.",
            )));
        }
    };

    match ShowRepo::create(&state.pool, &input).await {
        Ok(_) => pages::render_home(Some(Flash::success("Show was successfully listed!"))),
        Err(err) => {
            tracing::error!(error = %err, "Failed to create show");
            pages::render_home(Some(Flash::error(
                "An error occurred. Show could not be listed.",
            )))
        }
    }
}
