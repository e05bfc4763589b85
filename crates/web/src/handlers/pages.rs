//! Home page and fallback handlers.

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;

use crate::error::{error_page, AppResult};
use crate::views::{Flash, HomePage};

/// GET /
pub async fn home() -> AppResult<Html<String>> {
    render_home(None)
}

/// Render the home page with an optional flash banner.
///
/// Form submissions re-render this page in the same response, so the banner
/// never round-trips through a session.
pub fn render_home(flash: Option<Flash>) -> AppResult<Html<String>> {
    Ok(Html(HomePage { flash }.render()?))
}

/// Fallback for unknown routes: the site's 404 page.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        error_page(StatusCode::NOT_FOUND),
    )
}
