//! Artist lookup: resolve a query, then fan out to build profile and albums

use std::sync::Arc;

use anyhow::Result;
use futures::future::try_join_all;

use crate::auth::Credential;
use super::catalog::CatalogApi;
use super::types::{Album, AlbumSummary, ArtistLookup, ArtistProfile, ArtistRef};

pub struct CatalogAggregator<C> {
    catalog: Arc<C>,
}

impl<C> Clone for CatalogAggregator<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

impl<C: CatalogApi> CatalogAggregator<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Runs the full lookup for `query`.
    ///
    /// `Ok(None)` means the search had no artist hit. Any failure after the
    /// artist is resolved, including a single album's detail or track call,
    /// fails the whole lookup.
    pub async fn search(&self, credential: &Credential, query: &str) -> Result<Option<ArtistLookup>> {
        let Some(artist) = self.catalog.search_artist(credential, query).await? else {
            tracing::debug!(query, "No artist matched query");
            return Ok(None);
        };

        tracing::debug!(query, artist_id = %artist.id, artist = %artist.name, "Resolved artist");

        // The profile and the album listing only depend on the artist id.
        let (profile, summaries) = futures::try_join!(
            self.profile(credential, &artist),
            self.catalog.artist_albums(credential, &artist.id)
        )?;

        let albums = self.albums(credential, summaries).await?;

        tracing::info!(
            query,
            artist = %profile.name,
            top_tracks = profile.top_tracks.len(),
            albums = albums.len(),
            "Artist lookup completed"
        );

        Ok(Some(ArtistLookup { profile, albums }))
    }

    async fn profile(&self, credential: &Credential, artist: &ArtistRef) -> Result<ArtistProfile> {
        let (details, top_tracks) = futures::try_join!(
            self.catalog.artist(credential, &artist.id),
            self.catalog.artist_top_tracks(credential, &artist.id)
        )?;

        Ok(ArtistProfile::new(details, top_tracks))
    }

    /// Fetches detail and tracks of every album concurrently. The output keeps
    /// the listing order; the first failure cancels the rest.
    async fn albums(&self, credential: &Credential, summaries: Vec<AlbumSummary>) -> Result<Vec<Album>> {
        let fetches: Vec<_> = summaries
            .into_iter()
            .map(|summary| self.album(credential, summary))
            .collect();

        try_join_all(fetches).await
    }

    async fn album(&self, credential: &Credential, summary: AlbumSummary) -> Result<Album> {
        let (details, tracks) = futures::try_join!(
            self.catalog.album(credential, &summary.id),
            self.catalog.album_tracks(credential, &summary.id)
        )?;

        Ok(Album::new(summary, details, tracks))
    }
}
