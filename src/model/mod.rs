//! Model module - Application state, data types and catalog access
//!
//! - `types`: Catalog records and UI state
//! - `catalog`: The `CatalogApi` port over the external endpoints
//! - `spotify_client`: rspotify implementation of the port
//! - `aggregator`: The artist lookup flow (resolve, profile, album fan-out)
//! - `app_model`: Display state with generation-fenced commits

mod types;
mod catalog;
mod spotify_client;
mod aggregator;
mod app_model;

pub use types::{Album, ArtistLookup, ArtistProfile, Track, UiState};

#[cfg(test)]
pub use types::{AlbumDetails, AlbumSummary, ArtistDetails, ArtistRef};

pub use catalog::CatalogApi;

pub use spotify_client::SpotifyCatalog;

pub use aggregator::CatalogAggregator;

pub use app_model::AppModel;
