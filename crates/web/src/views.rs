//! Askama page templates and shared view data.
//!
//! Each page the site renders has a template struct here; the HTML lives in
//! `templates/`. Handlers build these structs from repository rows and call
//! `.render()`.

use std::fmt;

use askama::Template;
use encore_db::models::artist::{Artist, ArtistShow};
use encore_db::models::show::ShowListing;
use encore_db::models::venue::{Venue, VenueShow};

/// Genre choices offered by the venue and artist forms.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Two-letter US state codes offered by the forms.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

// ---------------------------------------------------------------------------
// Flash banners
// ---------------------------------------------------------------------------

/// Severity of a [`Flash`] banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashKind::Success => write!(f, "success"),
            FlashKind::Error => write!(f, "error"),
        }
    }
}

/// A banner rendered at the top of the home page after a form submission.
///
/// Submissions re-render the home page in the same response, so the banner
/// is passed straight into the template; there is no session layer.
#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "venues.html")]
pub struct VenuesPage {
    pub venues: Vec<Venue>,
}

#[derive(Template)]
#[template(path = "search_venues.html")]
pub struct VenueSearchPage {
    pub search_term: String,
    pub results: Vec<Venue>,
}

#[derive(Template)]
#[template(path = "show_venue.html")]
pub struct VenuePage {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

#[derive(Template)]
#[template(path = "artists.html")]
pub struct ArtistsPage {
    pub artists: Vec<Artist>,
}

#[derive(Template)]
#[template(path = "search_artists.html")]
pub struct ArtistSearchPage {
    pub search_term: String,
    pub results: Vec<Artist>,
}

#[derive(Template)]
#[template(path = "show_artist.html")]
pub struct ArtistPage {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

#[derive(Template)]
#[template(path = "shows.html")]
pub struct ShowsPage {
    pub shows: Vec<ShowListing>,
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "new_venue.html")]
pub struct NewVenuePage {
    pub genres: Vec<&'static str>,
    pub states: Vec<&'static str>,
}

impl NewVenuePage {
    pub fn new() -> Self {
        Self {
            genres: GENRES.to_vec(),
            states: STATES.to_vec(),
        }
    }
}

impl Default for NewVenuePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Edit form pre-populated with the venue's current values. The submit
/// handler is a stub, so nothing posted here is ever written back.
#[derive(Template)]
#[template(path = "edit_venue.html")]
pub struct EditVenuePage {
    pub venue: Venue,
    pub genres: Vec<&'static str>,
    pub states: Vec<&'static str>,
}

impl EditVenuePage {
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            genres: GENRES.to_vec(),
            states: STATES.to_vec(),
        }
    }

    fn has_genre(&self, genre: &str) -> bool {
        self.venue.genres.iter().any(|g| g == genre)
    }
}

#[derive(Template)]
#[template(path = "new_artist.html")]
pub struct NewArtistPage {
    pub genres: Vec<&'static str>,
    pub states: Vec<&'static str>,
}

impl NewArtistPage {
    pub fn new() -> Self {
        Self {
            genres: GENRES.to_vec(),
            states: STATES.to_vec(),
        }
    }
}

impl Default for NewArtistPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Edit form pre-populated with the artist's current values. The submit
/// handler is a stub, so nothing posted here is ever written back.
#[derive(Template)]
#[template(path = "edit_artist.html")]
pub struct EditArtistPage {
    pub artist: Artist,
    pub genres: Vec<&'static str>,
    pub states: Vec<&'static str>,
}

impl EditArtistPage {
    pub fn new(artist: Artist) -> Self {
        Self {
            artist,
            genres: GENRES.to_vec(),
            states: STATES.to_vec(),
        }
    }

    fn has_genre(&self, genre: &str) -> bool {
        self.artist.genres.iter().any(|g| g == genre)
    }
}

#[derive(Template)]
#[template(path = "new_show.html")]
pub struct NewShowPage;

// ---------------------------------------------------------------------------
// Error pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage;

#[derive(Template)]
#[template(path = "500.html")]
pub struct ServerErrorPage;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

pub mod filters {
    use encore_core::types::Timestamp;

    /// Display format used across the site for show times.
    pub fn datetime(value: &Timestamp) -> askama::Result<String> {
        Ok(value.format("%m/%d/%Y, %H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[test]
    fn datetime_filter_uses_site_display_format() {
        let t = Utc.with_ymd_and_hms(2025, 6, 15, 21, 30, 0).unwrap();
        assert_eq!(filters::datetime(&t).unwrap(), "06/15/2025, 21:30");
    }

    #[test]
    fn flash_kind_renders_as_css_suffix() {
        assert_eq!(FlashKind::Success.to_string(), "success");
        assert_eq!(FlashKind::Error.to_string(), "error");
    }

    #[test]
    fn edit_form_knows_selected_genres() {
        let venue = encore_db::models::venue::Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: None,
            phone: None,
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            facebook_link: None,
            image_link: None,
            seeking_talent: false,
            seeking_description: None,
            created_at: Utc::now(),
        };
        let page = EditVenuePage::new(venue);
        assert!(page.has_genre("Jazz"));
        assert!(!page.has_genre("Punk"));
    }
}
