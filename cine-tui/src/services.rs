//! Service layer adapter for the TUI
//!
//! Bridges the async catalog client and the synchronous event loop. Each
//! fetch is spawned on a private tokio runtime; the resulting `MovieAction`
//! comes back over a crossbeam channel the loop drains between frames.
//! Responses are committed in arrival order: overlapping fetches are
//! last-write-wins.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use tracing::debug;

use libcinescope::catalog::{CatalogClient, CatalogSource};
use libcinescope::state::store;
use libcinescope::state::MovieAction;
use libcinescope::Config;

use crate::app::FetchRequest;
use crate::error::Result;

/// Handle to the catalog, driving fetches for the event loop
pub struct ServiceHandle {
    catalog: Arc<dyn CatalogSource>,
    runtime: tokio::runtime::Runtime,
    tx: Sender<MovieAction>,
    rx: Receiver<MovieAction>,
}

impl ServiceHandle {
    /// Create a service handle from the user's configuration
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        config.require_api_key()?;

        let catalog = CatalogClient::new(config.catalog)
            .map_err(libcinescope::CinescopeError::Catalog)?;

        Self::with_catalog(Arc::new(catalog))
    }

    /// Create a service handle over any catalog source (used by tests)
    pub fn with_catalog(catalog: Arc<dyn CatalogSource>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (tx, rx) = unbounded();

        Ok(Self {
            catalog,
            runtime,
            tx,
            rx,
        })
    }

    /// Receiver for fetch results
    pub fn results(&self) -> Receiver<MovieAction> {
        self.rx.clone()
    }

    /// Spawn the fetch described by the request.
    ///
    /// Returns immediately; the outcome (data or error action) arrives on
    /// the results channel.
    pub fn dispatch(&self, request: FetchRequest) {
        debug!(?request, "dispatching fetch");
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let action = match request {
                FetchRequest::Category {
                    category,
                    page,
                    append,
                } => store::load_category(catalog.as_ref(), category, page, append).await,
                FetchRequest::Search {
                    query,
                    page,
                    append,
                } => store::load_search(catalog.as_ref(), &query, page, append).await,
                FetchRequest::Discover { genre_id, page } => {
                    store::load_discover(catalog.as_ref(), genre_id, page, false).await
                }
                FetchRequest::Details { movie_id } => {
                    store::load_details(catalog.as_ref(), movie_id).await
                }
                FetchRequest::Genres => store::load_genres(catalog.as_ref()).await,
            };

            // Receiver dropped means the app is shutting down
            let _ = tx.send(action);
        });
    }
}
