//! Core type definitions for the application

/// A track as returned by the catalog; only what the cards display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
}

/// First hit of an artist search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

/// Full artist record; `images` holds URLs in the order the API returns them
#[derive(Clone, Debug, Default)]
pub struct ArtistDetails {
    pub name: String,
    pub genres: Vec<String>,
    pub images: Vec<String>,
}

/// An entry of the artist's album listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

/// Full album record. The release date is kept as the opaque string the
/// API sends (`1997`, `1997-05`, `1997-05-21`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumDetails {
    pub id: String,
    pub release_date: String,
}

/// Profile card data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistProfile {
    pub name: String,
    pub genre: Option<String>,
    pub top_tracks: Vec<Track>,
    pub image_url: Option<String>,
}

impl ArtistProfile {
    pub fn new(details: ArtistDetails, top_tracks: Vec<Track>) -> Self {
        Self {
            name: details.name,
            genre: details.genres.into_iter().next(),
            top_tracks,
            image_url: details.images.into_iter().next(),
        }
    }
}

/// Album card data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub release_date: String,
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn new(summary: AlbumSummary, details: AlbumDetails, tracks: Vec<Track>) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            image_url: summary.image_url,
            release_date: details.release_date,
            tracks,
        }
    }
}

/// Everything one search produces. Profile and albums are committed together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistLookup {
    pub profile: ArtistProfile,
    pub albums: Vec<Album>,
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub search_query: String,
    pub is_loading: bool,
    /// Offset of the first visible card row
    pub scroll_row: usize,
    /// Cards per row in the last drawn frame
    pub card_columns: usize,
}
