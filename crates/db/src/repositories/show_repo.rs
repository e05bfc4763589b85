//! Repository for the `shows` table.

use sqlx::PgPool;

use crate::models::show::{CreateShow, Show, ShowListing};

/// Provides insert and listing operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// If `start_time` is `None`, defaults to the current time. Fails with a
    /// foreign-key violation if the artist or venue does not exist; the
    /// statement is atomic, so a failed insert leaves the table unchanged.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (artist_id, venue_id, start_time) \
             VALUES ($1, $2, COALESCE($3, NOW())) \
             RETURNING id, artist_id, venue_id, start_time",
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .fetch_one(pool)
        .await
    }

    /// List all shows joined with venue and artist names, in start order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name, \
                    s.artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time ASC",
        )
        .fetch_all(pool)
        .await
    }
}
