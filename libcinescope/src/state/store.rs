//! Effectful layer over the movie reducer
//!
//! Free loader functions turn a catalog call into the `MovieAction`
//! describing its outcome; failures become `SetError` so the caller
//! dispatches exactly one action either way. `MovieStore` bundles a
//! catalog source with the state for sequential callers; concurrent UIs
//! spawn the loaders directly and funnel the actions through their own
//! dispatch loop. Overlapping fetches are last-write-wins.

use std::mem;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::CatalogSource;
use crate::state::movies::{reduce, MovieAction, MovieState};
use crate::types::MovieCategory;

/// Fetch one page of a browsing category
pub async fn load_category<S: CatalogSource + ?Sized>(
    source: &S,
    category: MovieCategory,
    page: u32,
    append: bool,
) -> MovieAction {
    debug!(%category, page, append, "loading category");
    match source.list(category, page).await {
        Ok(page) if append => MovieAction::AppendList { category, page },
        Ok(page) => MovieAction::SetList { category, page },
        Err(e) => {
            warn!(%category, error = %e, "category fetch failed");
            MovieAction::SetError(format!("Failed to fetch {} movies: {}", category, e))
        }
    }
}

/// Search movies by title
pub async fn load_search<S: CatalogSource + ?Sized>(
    source: &S,
    query: &str,
    page: u32,
    append: bool,
) -> MovieAction {
    debug!(query, page, append, "loading search results");
    match source.search(query, page).await {
        Ok(page) if append => MovieAction::AppendSearchResults(page),
        Ok(page) => MovieAction::SetSearchResults(page),
        Err(e) => {
            warn!(query, error = %e, "search failed");
            MovieAction::SetError(format!("Failed to search for '{}': {}", query, e))
        }
    }
}

/// Discover movies by genre; results land in the search collection
pub async fn load_discover<S: CatalogSource + ?Sized>(
    source: &S,
    genre_id: u64,
    page: u32,
    append: bool,
) -> MovieAction {
    debug!(genre_id, page, append, "loading genre discovery");
    match source.discover_by_genre(genre_id, page).await {
        Ok(page) if append => MovieAction::AppendSearchResults(page),
        Ok(page) => MovieAction::SetSearchResults(page),
        Err(e) => {
            warn!(genre_id, error = %e, "genre discovery failed");
            MovieAction::SetError(format!("Failed to discover genre movies: {}", e))
        }
    }
}

/// Fetch full details for one movie
pub async fn load_details<S: CatalogSource + ?Sized>(source: &S, movie_id: u64) -> MovieAction {
    debug!(movie_id, "loading movie details");
    match source.details(movie_id).await {
        Ok(details) => MovieAction::SetSelected(details),
        Err(e) => {
            warn!(movie_id, error = %e, "details fetch failed");
            MovieAction::SetError(format!("Failed to fetch movie details: {}", e))
        }
    }
}

/// Fetch the genre index with backdrop enrichment
pub async fn load_genres<S: CatalogSource + ?Sized>(source: &S) -> MovieAction {
    debug!("loading genres");
    match source.genres_with_backdrops().await {
        Ok(tiles) => MovieAction::SetGenres(tiles),
        Err(e) => {
            warn!(error = %e, "genre fetch failed");
            MovieAction::SetError(format!("Failed to fetch genres: {}", e))
        }
    }
}

/// A catalog source paired with reducer state, for sequential consumers
pub struct MovieStore {
    catalog: Arc<dyn CatalogSource>,
    state: MovieState,
}

impl MovieStore {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            state: MovieState::default(),
        }
    }

    pub fn state(&self) -> &MovieState {
        &self.state
    }

    /// Apply one action to the state
    pub fn dispatch(&mut self, action: MovieAction) {
        self.state = reduce(mem::take(&mut self.state), action);
    }

    pub async fn fetch_category(&mut self, category: MovieCategory, page: u32, append: bool) {
        if !append {
            self.dispatch(MovieAction::SetLoading(true));
        }
        let action = load_category(self.catalog.as_ref(), category, page, append).await;
        self.dispatch(action);
    }

    pub async fn search(&mut self, query: &str, page: u32, append: bool) {
        if !append {
            self.dispatch(MovieAction::SetLoading(true));
        }
        let action = load_search(self.catalog.as_ref(), query, page, append).await;
        self.dispatch(action);
    }

    pub async fn discover_by_genre(&mut self, genre_id: u64, page: u32, append: bool) {
        if !append {
            self.dispatch(MovieAction::SetLoading(true));
        }
        let action = load_discover(self.catalog.as_ref(), genre_id, page, append).await;
        self.dispatch(action);
    }

    pub async fn fetch_details(&mut self, movie_id: u64) {
        self.dispatch(MovieAction::SetLoading(true));
        let action = load_details(self.catalog.as_ref(), movie_id).await;
        self.dispatch(action);
    }

    pub async fn fetch_genres(&mut self) {
        self.dispatch(MovieAction::SetLoading(true));
        let action = load_genres(self.catalog.as_ref()).await;
        self.dispatch(action);
    }

    pub fn clear_search(&mut self) {
        self.dispatch(MovieAction::ClearSearch);
    }

    pub fn clear_error(&mut self) {
        self.dispatch(MovieAction::ClearError);
    }
}
