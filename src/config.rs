//! Application configuration: client credentials from the environment plus
//! the fixed request parameters of the lookup flow.

use std::time::Duration;

use anyhow::{anyhow, Result};
use rspotify::{
    model::{Country, Market},
    Credentials,
};

/// Market/country every catalog request is pinned to.
pub const MARKET: Market = Market::Country(Country::UnitedStates);

/// Only the best match of a search is used.
pub const SEARCH_LIMIT: u32 = 1;

/// Maximum page size of the artist albums endpoint.
pub const ALBUM_LIMIT: u32 = 50;

/// Maximum page size of the album tracks endpoint.
pub const ALBUM_TRACK_LIMIT: u32 = 50;

/// A credential with fewer seconds than this left is exchanged again before use.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 300;

/// How long the UI loop waits for a key event before redrawing.
pub const UI_POLL_INTERVAL: Duration = Duration::from_millis(50);

const CLIENT_ID_VAR: &str = "RSPOTIFY_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "RSPOTIFY_CLIENT_SECRET";

#[derive(Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
}

impl AppConfig {
    /// Reads the client id and secret from the process environment.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env().ok_or_else(|| {
            anyhow!("{CLIENT_ID_VAR} and {CLIENT_SECRET_VAR} must be set to request an access token")
        })?;

        if credentials.secret.as_deref().is_none_or(str::is_empty) {
            return Err(anyhow!("{CLIENT_SECRET_VAR} must not be empty"));
        }

        tracing::debug!(client_id = %credentials.id, "Loaded client credentials from environment");
        Ok(Self { credentials })
    }
}
