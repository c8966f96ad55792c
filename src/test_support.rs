//! In-memory catalog used by the unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::auth::Credential;
use crate::model::{
    AlbumDetails, AlbumSummary, ArtistDetails, ArtistRef, CatalogApi, Track,
};

const TOKEN_PREFIX: &str = "fake-token-";

#[derive(Clone, Debug)]
pub struct FakeAlbum {
    pub summary: AlbumSummary,
    pub release_date: String,
    pub tracks: Vec<Track>,
}

#[derive(Clone, Debug)]
pub struct FakeArtist {
    pub id: String,
    pub details: ArtistDetails,
    pub top_tracks: Vec<Track>,
    pub albums: Vec<FakeAlbum>,
}

pub fn track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn album(id: &str, name: &str, release_date: &str, track_names: &[&str]) -> FakeAlbum {
    FakeAlbum {
        summary: AlbumSummary {
            id: id.to_string(),
            name: name.to_string(),
            image_url: Some(format!("https://img.example/{id}.jpg")),
        },
        release_date: release_date.to_string(),
        tracks: track_names
            .iter()
            .enumerate()
            .map(|(i, n)| track(&format!("{id}-t{i}"), n))
            .collect(),
    }
}

pub fn radiohead() -> FakeArtist {
    FakeArtist {
        id: "4Z8W4fKeB5YxbusRsdQVPb".to_string(),
        details: ArtistDetails {
            name: "Radiohead".to_string(),
            genres: vec!["art rock".to_string(), "alternative rock".to_string()],
            images: vec!["https://img.example/radiohead.jpg".to_string()],
        },
        top_tracks: vec![
            track("tt1", "Creep"),
            track("tt2", "No Surprises"),
            track("tt3", "Karma Police"),
        ],
        albums: vec![
            album("okc", "OK Computer", "1997-05-21", &["Airbag", "Paranoid Android", "Subterranean Homesick Alien"]),
            album("kid", "Kid A", "2000-10-02", &["Everything In Its Right Place", "Kid A"]),
            album("irb", "In Rainbows", "2007-10-10", &["15 Step", "Bodysnatchers", "Nude", "Weird Fishes/Arpeggi"]),
            album("pab", "Pablo Honey", "1993", &["You", "Creep"]),
        ],
    }
}

pub fn bjork() -> FakeArtist {
    FakeArtist {
        id: "7w29UYBi0qsHi5RTcv3lmA".to_string(),
        details: ArtistDetails {
            name: "Björk".to_string(),
            genres: vec![],
            images: vec![],
        },
        top_tracks: vec![track("bt1", "Army of Me")],
        albums: vec![album("deb", "Debut", "1993-07-05", &["Human Behaviour", "Crying"])],
    }
}

pub struct FakeCatalog {
    artists: HashMap<String, FakeArtist>,
    token_fails: bool,
    refresh_fails: bool,
    token_lifetime: chrono::Duration,
    failing_albums: HashSet<String>,
    album_delays: HashMap<String, Duration>,
    search_delay: Option<Duration>,
    issued: AtomicUsize,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            artists: HashMap::new(),
            token_fails: false,
            refresh_fails: false,
            token_lifetime: chrono::Duration::seconds(3600),
            failing_albums: HashSet::new(),
            album_delays: HashMap::new(),
            search_delay: None,
            issued: AtomicUsize::new(0),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Registers an artist found by `query` (case-insensitive).
    pub fn with_artist(mut self, query: &str, artist: FakeArtist) -> Self {
        self.artists.insert(query.to_lowercase(), artist);
        self
    }

    pub fn failing_token(mut self) -> Self {
        self.token_fails = true;
        self
    }

    /// The first exchange succeeds, every later one fails.
    pub fn failing_refresh(mut self) -> Self {
        self.refresh_fails = true;
        self
    }

    pub fn token_lifetime(mut self, lifetime: chrono::Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    pub fn failing_album(mut self, album_id: &str) -> Self {
        self.failing_albums.insert(album_id.to_string());
        self
    }

    pub fn album_delay(mut self, album_id: &str, delay: Duration) -> Self {
        self.album_delays.insert(album_id.to_string(), delay);
        self
    }

    pub fn search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = Some(delay);
        self
    }

    /// A credential this catalog accepts.
    pub fn credential(&self) -> Credential {
        Credential::new(format!("{TOKEN_PREFIX}static"), None)
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.get(endpoint).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record(&self, endpoint: &'static str) {
        *self.calls.lock().unwrap().entry(endpoint).or_default() += 1;
    }

    fn authorize(&self, credential: &Credential) -> Result<()> {
        if credential.access_token().starts_with(TOKEN_PREFIX) {
            Ok(())
        } else {
            Err(anyhow!("http error: status code 401 Unauthorized"))
        }
    }

    fn find_artist(&self, artist_id: &str) -> Result<&FakeArtist> {
        self.artists
            .values()
            .find(|a| a.id == artist_id)
            .ok_or_else(|| anyhow!("http error: status code 404 Not Found"))
    }

    fn find_album(&self, album_id: &str) -> Result<&FakeAlbum> {
        self.artists
            .values()
            .flat_map(|a| a.albums.iter())
            .find(|a| a.summary.id == album_id)
            .ok_or_else(|| anyhow!("http error: status code 404 Not Found"))
    }

    async fn album_latency(&self, album_id: &str) -> Result<()> {
        if let Some(delay) = self.album_delays.get(album_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_albums.contains(album_id) {
            return Err(anyhow!("http error: status code 502 Bad Gateway"));
        }
        Ok(())
    }
}

impl CatalogApi for FakeCatalog {
    async fn request_token(&self) -> Result<Credential> {
        self.record("token");
        if self.token_fails {
            return Err(anyhow!("http error: status code 400 Bad Request"));
        }
        if self.refresh_fails && self.issued.load(Ordering::SeqCst) > 0 {
            return Err(anyhow!("http error: status code 503 Service Unavailable"));
        }
        let n = self.issued.fetch_add(1, Ordering::SeqCst);
        Ok(Credential::new(
            format!("{TOKEN_PREFIX}{n}"),
            Some(Utc::now() + self.token_lifetime),
        ))
    }

    async fn search_artist(&self, credential: &Credential, query: &str) -> Result<Option<ArtistRef>> {
        self.record("search");
        self.authorize(credential)?;
        if let Some(delay) = self.search_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.artists.get(&query.to_lowercase()).map(|a| ArtistRef {
            id: a.id.clone(),
            name: a.details.name.clone(),
        }))
    }

    async fn artist(&self, credential: &Credential, artist_id: &str) -> Result<ArtistDetails> {
        self.record("artist");
        self.authorize(credential)?;
        Ok(self.find_artist(artist_id)?.details.clone())
    }

    async fn artist_top_tracks(&self, credential: &Credential, artist_id: &str) -> Result<Vec<Track>> {
        self.record("top_tracks");
        self.authorize(credential)?;
        Ok(self.find_artist(artist_id)?.top_tracks.clone())
    }

    async fn artist_albums(&self, credential: &Credential, artist_id: &str) -> Result<Vec<AlbumSummary>> {
        self.record("artist_albums");
        self.authorize(credential)?;
        Ok(self
            .find_artist(artist_id)?
            .albums
            .iter()
            .map(|a| a.summary.clone())
            .collect())
    }

    async fn album(&self, credential: &Credential, album_id: &str) -> Result<AlbumDetails> {
        self.record("album");
        self.authorize(credential)?;
        self.album_latency(album_id).await?;
        let album = self.find_album(album_id)?;
        Ok(AlbumDetails {
            id: album.summary.id.clone(),
            release_date: album.release_date.clone(),
        })
    }

    async fn album_tracks(&self, credential: &Credential, album_id: &str) -> Result<Vec<Track>> {
        self.record("album_tracks");
        self.authorize(credential)?;
        self.album_latency(album_id).await?;
        Ok(self.find_album(album_id)?.tracks.clone())
    }
}
