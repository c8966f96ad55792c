//! The catalog port: every external call the lookup flow makes.
//!
//! `SpotifyCatalog` is the production implementation; tests use an
//! in-memory fake.

use anyhow::Result;

use crate::auth::Credential;
use super::types::{AlbumDetails, AlbumSummary, ArtistDetails, ArtistRef, Track};

pub trait CatalogApi: Send + Sync {
    /// Client-credentials token exchange.
    fn request_token(&self) -> impl Future<Output = Result<Credential>> + Send;

    /// Best artist match for a free-text query, if any.
    fn search_artist(
        &self,
        credential: &Credential,
        query: &str,
    ) -> impl Future<Output = Result<Option<ArtistRef>>> + Send;

    fn artist(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> impl Future<Output = Result<ArtistDetails>> + Send;

    fn artist_top_tracks(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>>> + Send;

    /// The artist's albums (group `album`), in API order.
    fn artist_albums(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> impl Future<Output = Result<Vec<AlbumSummary>>> + Send;

    fn album(
        &self,
        credential: &Credential,
        album_id: &str,
    ) -> impl Future<Output = Result<AlbumDetails>> + Send;

    fn album_tracks(
        &self,
        credential: &Credential,
        album_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>>> + Send;
}
