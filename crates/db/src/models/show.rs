//! Show entity model and DTOs.
//!
//! A show links one artist to one venue at a start time. The past/upcoming
//! classification is derived from `start_time` at query time, never stored.

use encore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// DTO for creating a new show.
///
/// `start_time` defaults to the current time if omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Option<Timestamp>,
}

/// A show on the listings page, joined with venue and artist names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}
