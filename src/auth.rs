use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::TOKEN_REFRESH_MARGIN_SECS;
use crate::model::CatalogApi;

/// Bearer credential for the catalog API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(access_token: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// A credential without a known expiry never needs a refresh.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(exp) => (exp - now).num_seconds() < TOKEN_REFRESH_MARGIN_SECS,
            None => false,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Holds the session's single credential. Starts absent.
pub struct TokenProvider<C> {
    catalog: Arc<C>,
    credential: Arc<RwLock<Option<Credential>>>,
}

impl<C> Clone for TokenProvider<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            credential: self.credential.clone(),
        }
    }
}

impl<C: CatalogApi> TokenProvider<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            credential: Arc::new(RwLock::new(None)),
        }
    }

    /// Runs one token exchange. A failure is logged and leaves the stored
    /// state untouched; nothing is retried.
    pub async fn acquire(&self) -> Option<Credential> {
        tracing::info!("Requesting access token");

        match self.catalog.request_token().await {
            Ok(credential) => {
                tracing::info!(expires_at = ?credential.expires_at(), "Access token acquired");
                *self.credential.write().await = Some(credential.clone());
                Some(credential)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error obtaining access token");
                None
            }
        }
    }

    pub async fn current(&self) -> Option<Credential> {
        self.credential.read().await.clone()
    }

    /// Credential for the next search. An expiring credential is exchanged
    /// once; if that fails the stale one is handed out and the API decides.
    pub async fn credential_for_request(&self) -> Option<Credential> {
        let current = self.current().await?;

        if !current.needs_refresh(Utc::now()) {
            return Some(current);
        }

        tracing::info!("Access token expiring soon, refreshing...");
        match self.acquire().await {
            Some(fresh) => Some(fresh),
            None => Some(current),
        }
    }
}
