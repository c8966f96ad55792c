//! Search submission and the lookup task

use super::AppController;
use crate::model::CatalogApi;

impl<C: CatalogApi + 'static> AppController<C> {
    /// Starts a lookup for the current query in the background. A lookup
    /// still running from an earlier submit is aborted.
    pub async fn submit_search(&self) {
        let query = self.model.search_query().await;
        let generation = self.model.begin_search().await;

        let controller = self.clone();
        let handle = tokio::spawn(async move {
            controller.perform_search(&query, generation).await;
        });

        if let Some(previous) = self.in_flight.lock().await.replace(handle) {
            if !previous.is_finished() {
                tracing::debug!(generation, "Aborting superseded search");
            }
            previous.abort();
        }
    }

    /// Runs one lookup round and commits its outcome.
    ///
    /// Only a successful lookup touches the displayed results; a miss, a
    /// failure or a missing credential leaves them as they were.
    pub async fn perform_search(&self, query: &str, generation: u64) {
        tracing::debug!(query, generation, "Performing search");

        let Some(credential) = self.tokens.credential_for_request().await else {
            tracing::warn!(query, "No access token available, search skipped");
            self.model.finish_search(generation).await;
            return;
        };

        match self.aggregator.search(&credential, query).await {
            Ok(Some(lookup)) => {
                let albums = lookup.albums.len();
                if self.model.commit_results(generation, lookup).await {
                    tracing::info!(query, generation, albums, "Search results committed");
                }
            }
            Ok(None) => {
                tracing::info!(query, "Search returned no artist");
                self.model.finish_search(generation).await;
            }
            Err(e) => {
                tracing::error!(query, error = %e, "Search failed");
                self.model.finish_search(generation).await;
            }
        }
    }

    #[cfg(test)]
    pub(crate) async fn wait_for_search(&self) {
        let handle = self.in_flight.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
