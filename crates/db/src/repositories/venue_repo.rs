//! Repository for the `venues` table.

use encore_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, Venue, VenueShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, facebook_link, \
     image_link, seeking_talent, seeking_description, created_at";

/// Provides read and insert operations for venues.
///
/// Venues are never updated or deleted; the corresponding routes are stubs.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues \
                (name, city, state, address, phone, genres, facebook_link, \
                 image_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.facebook_link)
            .bind(&input.image_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all venues, ordered by name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues ORDER BY name ASC");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Search venues by name (case-insensitive substring match).
    ///
    /// An empty term matches every row.
    pub async fn search_by_name(pool: &PgPool, term: &str) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM venues \
             WHERE name ILIKE '%' || $1 || '%' \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }

    /// Shows at this venue that started before the current time, joined with
    /// the performing artist, most recent first.
    pub async fn past_shows(pool: &PgPool, venue_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 AND s.start_time < NOW() \
             ORDER BY s.start_time DESC",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows at this venue that start after the current time, soonest first.
    pub async fn upcoming_shows(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 AND s.start_time > NOW() \
             ORDER BY s.start_time ASC",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }
}
