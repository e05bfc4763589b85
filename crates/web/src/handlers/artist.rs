//! Handlers for the `/artists` pages.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::Form;
use encore_core::error::CoreError;
use encore_core::types::DbId;
use encore_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::forms::{ArtistForm, SearchForm};
use crate::handlers::pages;
use crate::state::AppState;
use crate::views::{
    ArtistPage, ArtistSearchPage, ArtistsPage, EditArtistPage, Flash, NewArtistPage,
};

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let artists = ArtistRepo::list_all(&state.pool).await?;
    Ok(Html(ArtistsPage { artists }.render()?))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let results = ArtistRepo::search_by_name(&state.pool, &form.search_term).await?;
    Ok(Html(
        ArtistSearchPage {
            search_term: form.search_term,
            results,
        }
        .render()?,
    ))
}

/// GET /artists/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    let past_shows = ArtistRepo::past_shows(&state.pool, id).await?;
    let upcoming_shows = ArtistRepo::upcoming_shows(&state.pool, id).await?;

    Ok(Html(
        ArtistPage {
            artist,
            past_shows,
            upcoming_shows,
        }
        .render()?,
    ))
}

/// GET /artists/create
pub async fn new_form() -> AppResult<Html<String>> {
    Ok(Html(NewArtistPage::new().render()?))
}

/// POST /artists/create
///
/// Success and write failure alike re-render the home page with a flash
/// banner. The insert is a single atomic statement, so a failure leaves the
/// table unchanged.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> AppResult<Html<String>> {
    let input = form.into_create();
    match ArtistRepo::create(&state.pool, &input).await {
        Ok(artist) => pages::render_home(Some(Flash::success(format!(
            "Artist {} was successfully listed!",
            artist.name
        )))),
        Err(err) => {
            tracing::error!(error = %err, "Failed to create artist");
            pages::render_home(Some(Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                input.name
            ))))
        }
    }
}

/// GET /artists/{id}/edit
///
/// Renders the edit form populated with current values. The submit handler
/// below never writes, so this page is effectively read-only.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;

    Ok(Html(EditArtistPage::new(artist).render()?))
}

/// POST /artists/{id}/edit
///
/// Deliberate stub: redirects to the artist page without applying changes.
pub async fn edit_submit(Path(id): Path<DbId>) -> Redirect {
    Redirect::to(&format!("/artists/{id}"))
}
