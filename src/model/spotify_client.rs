//! Spotify Web API implementation of the catalog port

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use rspotify::{
    model::{AlbumId, AlbumType, ArtistId, SearchResult, SearchType},
    prelude::*,
    ClientCredsSpotify, Config, Credentials, Token,
};

use crate::auth::Credential;
use crate::config::{ALBUM_LIMIT, ALBUM_TRACK_LIMIT, MARKET, SEARCH_LIMIT};
use crate::{log_api_request, log_api_result};
use super::catalog::CatalogApi;
use super::types::{AlbumDetails, AlbumSummary, ArtistDetails, ArtistRef, Track};

/// Client-credentials Spotify client
#[derive(Clone)]
pub struct SpotifyCatalog {
    client: Arc<ClientCredsSpotify>,
}

impl SpotifyCatalog {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, Config::default())
    }

    /// Token caching and refreshing stay off; the `TokenProvider` owns both.
    fn with_config(credentials: Credentials, config: Config) -> Self {
        let client = ClientCredsSpotify::with_config(
            credentials,
            Config {
                token_cached: false,
                token_refreshing: false,
                ..config
            },
        );

        tracing::debug!("rspotify client initialized");
        Self {
            client: Arc::new(client),
        }
    }

    /// Installs the caller's credential on the shared client before a call.
    async fn authorize(&self, credential: &Credential) -> Result<()> {
        let mut token = self
            .client
            .token
            .lock()
            .await
            .map_err(|_| anyhow!("rspotify token lock unavailable"))?;

        let up_to_date = token
            .as_ref()
            .is_some_and(|t| t.access_token == credential.access_token());
        if !up_to_date {
            *token = Some(to_token(credential));
        }
        Ok(())
    }
}

fn to_token(credential: &Credential) -> Token {
    let expires_in = credential
        .expires_at()
        .map(|exp| exp - chrono::Utc::now())
        .unwrap_or_else(|| chrono::Duration::seconds(3600));

    Token {
        access_token: credential.access_token().to_string(),
        expires_in,
        expires_at: credential.expires_at(),
        scopes: HashSet::new(),
        refresh_token: None,
    }
}

fn track_from(id: Option<String>, name: String) -> Track {
    Track {
        id: id.unwrap_or_default(),
        name,
    }
}

impl CatalogApi for SpotifyCatalog {
    async fn request_token(&self) -> Result<Credential> {
        log_api_request!("request_token", grant_type = "client_credentials");
        let result = self.client.request_token().await;
        log_api_result!("request_token", result);
        result.context("token exchange failed")?;

        let token = self
            .client
            .token
            .lock()
            .await
            .map_err(|_| anyhow!("rspotify token lock unavailable"))?
            .clone()
            .ok_or_else(|| anyhow!("token exchange returned no token"))?;

        Ok(Credential::new(token.access_token, token.expires_at))
    }

    async fn search_artist(&self, credential: &Credential, query: &str) -> Result<Option<ArtistRef>> {
        self.authorize(credential).await?;
        log_api_request!("search", query, limit = SEARCH_LIMIT);

        let result = self
            .client
            .search(query, SearchType::Artist, Some(MARKET), None, Some(SEARCH_LIMIT), None)
            .await;
        log_api_result!("search", result);

        match result? {
            SearchResult::Artists(page) => Ok(page.items.into_iter().next().map(|artist| ArtistRef {
                id: artist.id.id().to_string(),
                name: artist.name,
            })),
            _ => Err(anyhow!("search for artists returned a different result type")),
        }
    }

    async fn artist(&self, credential: &Credential, artist_id: &str) -> Result<ArtistDetails> {
        self.authorize(credential).await?;
        let id = ArtistId::from_id(artist_id).with_context(|| format!("invalid artist id {artist_id}"))?;
        log_api_request!("artist", artist_id);

        let result = self.client.artist(id).await;
        log_api_result!("artist", result);
        let artist = result?;

        Ok(ArtistDetails {
            name: artist.name,
            genres: artist.genres,
            images: artist.images.into_iter().map(|image| image.url).collect(),
        })
    }

    async fn artist_top_tracks(&self, credential: &Credential, artist_id: &str) -> Result<Vec<Track>> {
        self.authorize(credential).await?;
        let id = ArtistId::from_id(artist_id).with_context(|| format!("invalid artist id {artist_id}"))?;
        log_api_request!("artist_top_tracks", artist_id);

        let result = self.client.artist_top_tracks(id, Some(MARKET)).await;
        log_api_result!("artist_top_tracks", result);

        Ok(result?
            .into_iter()
            .map(|track| track_from(track.id.map(|id| id.id().to_string()), track.name))
            .collect())
    }

    async fn artist_albums(&self, credential: &Credential, artist_id: &str) -> Result<Vec<AlbumSummary>> {
        self.authorize(credential).await?;
        let id = ArtistId::from_id(artist_id).with_context(|| format!("invalid artist id {artist_id}"))?;
        log_api_request!("artist_albums", artist_id, limit = ALBUM_LIMIT);

        let result = self
            .client
            .artist_albums_manual(id, [AlbumType::Album], Some(MARKET), Some(ALBUM_LIMIT), None)
            .await;
        log_api_result!("artist_albums", result);

        Ok(result?
            .items
            .into_iter()
            .map(|album| AlbumSummary {
                id: album.id.map(|id| id.id().to_string()).unwrap_or_default(),
                name: album.name,
                image_url: album.images.into_iter().next().map(|image| image.url),
            })
            .collect())
    }

    async fn album(&self, credential: &Credential, album_id: &str) -> Result<AlbumDetails> {
        self.authorize(credential).await?;
        let id = AlbumId::from_id(album_id).with_context(|| format!("invalid album id {album_id}"))?;
        log_api_request!("album", album_id);

        let result = self.client.album(id, None).await;
        log_api_result!("album", result);
        let album = result?;

        Ok(AlbumDetails {
            id: album.id.id().to_string(),
            release_date: album.release_date,
        })
    }

    async fn album_tracks(&self, credential: &Credential, album_id: &str) -> Result<Vec<Track>> {
        self.authorize(credential).await?;
        let id = AlbumId::from_id(album_id).with_context(|| format!("invalid album id {album_id}"))?;
        log_api_request!("album_tracks", album_id);

        let result = self
            .client
            .album_track_manual(id, None, Some(ALBUM_TRACK_LIMIT), None)
            .await;
        log_api_result!("album_tracks", result);

        Ok(result?
            .items
            .into_iter()
            .map(|track| track_from(track.id.map(|id| id.id().to_string()), track.name))
            .collect())
    }
}
