use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use encore_core::error::CoreError;

use crate::views::{NotFoundPage, ServerErrorPage};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds web-specific variants.
/// Implements [`IntoResponse`] to render the site's HTML error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `encore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template rendering error from Askama.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, error_page(status)).into_response()
    }
}

/// Render the HTML error page for a status code.
///
/// Falls back to a plain-text body if the error template itself fails to
/// render, so the error path can never recurse.
pub fn error_page(status: StatusCode) -> Html<String> {
    let rendered = if status == StatusCode::NOT_FOUND {
        NotFoundPage.render()
    } else {
        ServerErrorPage.render()
    };

    Html(rendered.unwrap_or_else(|_| format!("<h1>{status}</h1>")))
}
