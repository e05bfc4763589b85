//! Handlers for the `/venues` pages.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum_extra::extract::Form;
use encore_core::error::CoreError;
use encore_core::types::DbId;
use encore_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::forms::{SearchForm, VenueForm};
use crate::handlers::pages;
use crate::state::AppState;
use crate::views::{EditVenuePage, Flash, NewVenuePage, VenuePage, VenueSearchPage, VenuesPage};

/// GET /venues
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let venues = VenueRepo::list_all(&state.pool).await?;
    Ok(Html(VenuesPage { venues }.render()?))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let results = VenueRepo::search_by_name(&state.pool, &form.search_term).await?;
    Ok(Html(
        VenueSearchPage {
            search_term: form.search_term,
            results,
        }
        .render()?,
    ))
}

/// GET /venues/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;
    let past_shows = VenueRepo::past_shows(&state.pool, id).await?;
    let upcoming_shows = VenueRepo::upcoming_shows(&state.pool, id).await?;

    Ok(Html(
        VenuePage {
            venue,
            past_shows,
            upcoming_shows,
        }
        .render()?,
    ))
}

/// GET /venues/create
pub async fn new_form() -> AppResult<Html<String>> {
    Ok(Html(NewVenuePage::new().render()?))
}

/// POST /venues/create
///
/// Success and write failure alike re-render the home page with a flash
/// banner. The insert is a single atomic statement, so a failure leaves the
/// table unchanged.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> AppResult<Html<String>> {
    let input = form.into_create();
    match VenueRepo::create(&state.pool, &input).await {
        Ok(venue) => pages::render_home(Some(Flash::success(format!(
            "Venue {} was successfully listed!",
            venue.name
        )))),
        Err(err) => {
            tracing::error!(error = %err, "Failed to create venue");
            pages::render_home(Some(Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                input.name
            ))))
        }
    }
}

/// DELETE /venues/{id}
///
/// Deliberate stub: venue deletion has never been implemented.
pub async fn delete(Path(_id): Path<DbId>) -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

/// GET /venues/{id}/edit
///
/// Renders the edit form populated with current values. The submit handler
/// below never writes, so this page is effectively read-only.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Venue", id }))?;

    Ok(Html(EditVenuePage::new(venue).render()?))
}

/// POST /venues/{id}/edit
///
/// Deliberate stub: redirects to the venue page without applying changes.
pub async fn edit_submit(Path(id): Path<DbId>) -> Redirect {
    Redirect::to(&format!("/venues/{id}"))
}
