//! Payloads posted by the site's HTML forms.
//!
//! Forms arrive as `application/x-www-form-urlencoded`. Multi-select fields
//! (`genres`) repeat the key, so these DTOs are extracted with
//! `axum_extra::extract::Form`, which understands repeated keys.

use chrono::NaiveDateTime;
use encore_core::types::Timestamp;
use encore_db::models::artist::CreateArtist;
use encore_db::models::show::CreateShow;
use encore_db::models::venue::CreateVenue;
use serde::Deserialize;

/// Payload of the venue and artist search forms.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Payload of the new-venue form.
#[derive(Debug, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    /// Checkbox: present when checked, absent otherwise.
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn into_create(self) -> CreateVenue {
        CreateVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: blank_to_none(self.address),
            phone: blank_to_none(self.phone),
            genres: self.genres,
            facebook_link: blank_to_none(self.facebook_link),
            image_link: blank_to_none(self.image_link),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: blank_to_none(self.seeking_description),
        }
    }
}

/// Payload of the new-artist form.
#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    /// Checkbox: present when checked, absent otherwise.
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn into_create(self) -> CreateArtist {
        CreateArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: blank_to_none(self.phone),
            genres: self.genres,
            image_link: blank_to_none(self.image_link),
            facebook_link: blank_to_none(self.facebook_link),
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: blank_to_none(self.seeking_description),
        }
    }
}

/// Error for a show form whose start time cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid start time: {0:?}")]
pub struct InvalidStartTime(pub String);

/// Payload of the new-show form.
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    pub artist_id: i64,
    pub venue_id: i64,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    /// An empty start time falls back to the database default (now).
    pub fn into_create(self) -> Result<CreateShow, InvalidStartTime> {
        let start_time = if self.start_time.trim().is_empty() {
            None
        } else {
            Some(parse_start_time(&self.start_time).ok_or(InvalidStartTime(self.start_time))?)
        };

        Ok(CreateShow {
            artist_id: self.artist_id,
            venue_id: self.venue_id,
            start_time,
        })
    }
}

/// Parse a form start time, accepting the HTML `datetime-local` format and
/// the space-separated variants older clients submit.
fn parse_start_time(raw: &str) -> Option<Timestamp> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.and_utc())
}

/// Optional text inputs post empty strings; store those as NULL.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
