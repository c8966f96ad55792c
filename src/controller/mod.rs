//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `search`: Search submission and the lookup task

mod input;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::auth::TokenProvider;
use crate::model::{AppModel, CatalogAggregator, CatalogApi};

pub struct AppController<C> {
    pub(crate) model: AppModel,
    pub(crate) tokens: TokenProvider<C>,
    pub(crate) aggregator: CatalogAggregator<C>,
    in_flight: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<C> Clone for AppController<C> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            tokens: self.tokens.clone(),
            aggregator: self.aggregator.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<C: CatalogApi + 'static> AppController<C> {
    pub fn new(model: AppModel, catalog: Arc<C>, tokens: TokenProvider<C>) -> Self {
        Self {
            model,
            tokens,
            aggregator: CatalogAggregator::new(catalog),
            in_flight: Arc::new(Mutex::new(None)),
        }
    }
}
