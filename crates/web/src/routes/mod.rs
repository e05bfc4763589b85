pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Build the site's page route tree.
///
/// ```text
/// GET    /                      home page
///
/// GET    /venues                list all venues
/// POST   /venues/search         search venues by name
/// GET    /venues/create         new venue form
/// POST   /venues/create         create venue
/// GET    /venues/{id}           venue detail (past/upcoming shows)
/// DELETE /venues/{id}           stub (501)
/// GET    /venues/{id}/edit      edit form (stub, read-only)
/// POST   /venues/{id}/edit      stub redirect to detail
///
/// GET    /artists               list all artists
/// POST   /artists/search        search artists by name
/// GET    /artists/create        new artist form
/// POST   /artists/create        create artist
/// GET    /artists/{id}          artist detail (past/upcoming shows)
/// GET    /artists/{id}/edit     edit form (stub, read-only)
/// POST   /artists/{id}/edit     stub redirect to detail
///
/// GET    /shows                 list all shows
/// GET    /shows/create          new show form
/// POST   /shows/create          create show
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
