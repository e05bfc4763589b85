//! Repository for the `artists` table.

use encore_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistShow, CreateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
     seeking_venue, seeking_description, created_at";

/// Provides read and insert operations for artists.
///
/// Artists are never updated or deleted; the corresponding routes are stubs.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists \
                (name, city, state, phone, genres, image_link, facebook_link, \
                 seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists, ordered by name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name ASC");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Search artists by name (case-insensitive substring match).
    ///
    /// An empty term matches every row.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists \
             WHERE name ILIKE '%' || $1 || '%' \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }

    /// Shows this artist played before the current time, joined with the
    /// hosting venue, most recent first.
    pub async fn past_shows(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 AND s.start_time < NOW() \
             ORDER BY s.start_time DESC",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Shows this artist plays after the current time, soonest first.
    pub async fn upcoming_shows(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 AND s.start_time > NOW() \
             ORDER BY s.start_time ASC",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}
