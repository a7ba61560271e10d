//! Movie browsing state and its reducer
//!
//! One collection per browsing category plus one for search results, a
//! single selected-details slot, and shared loading/error flags. The
//! reducer is pure; all fetching happens in [`crate::state::store`].

use crate::types::{GenreTile, Movie, MovieCategory, MovieDetails, Page};

/// One movie collection with its pagination cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCollection {
    pub movies: Vec<Movie>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl MovieCollection {
    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Complete browsing state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieState {
    pub upcoming: MovieCollection,
    pub popular: MovieCollection,
    pub top_rated: MovieCollection,
    pub now_playing: MovieCollection,
    pub search_results: MovieCollection,
    pub genres: Vec<GenreTile>,
    pub selected: Option<MovieDetails>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MovieState {
    pub fn collection(&self, category: MovieCategory) -> &MovieCollection {
        match category {
            MovieCategory::Upcoming => &self.upcoming,
            MovieCategory::Popular => &self.popular,
            MovieCategory::TopRated => &self.top_rated,
            MovieCategory::NowPlaying => &self.now_playing,
        }
    }

    fn collection_mut(&mut self, category: MovieCategory) -> &mut MovieCollection {
        match category {
            MovieCategory::Upcoming => &mut self.upcoming,
            MovieCategory::Popular => &mut self.popular,
            MovieCategory::TopRated => &mut self.top_rated,
            MovieCategory::NowPlaying => &mut self.now_playing,
        }
    }
}

/// All state transitions for the movie container
#[derive(Debug, Clone, PartialEq)]
pub enum MovieAction {
    /// Replace a category collection with a freshly fetched page
    SetList {
        category: MovieCategory,
        page: Page<Movie>,
    },
    /// Append a further page to a category collection
    AppendList {
        category: MovieCategory,
        page: Page<Movie>,
    },
    /// Replace the search results (search and genre discovery both land here)
    SetSearchResults(Page<Movie>),
    /// Append a further page of search results
    AppendSearchResults(Page<Movie>),
    /// Drop the search results
    ClearSearch,
    SetGenres(Vec<GenreTile>),
    SetSelected(MovieDetails),
    ClearSelected,
    SetLoading(bool),
    SetError(String),
    ClearError,
}

fn replace(collection: &mut MovieCollection, page: Page<Movie>) {
    collection.movies = page.results;
    collection.current_page = page.page;
    collection.total_pages = page.total_pages;
    collection.total_results = page.total_results;
}

fn append(collection: &mut MovieCollection, page: Page<Movie>) {
    collection.movies.extend(page.results);
    // Totals were established by the initial page; only the cursor moves
    collection.current_page = page.page;
}

/// Pure state transition function
pub fn reduce(mut state: MovieState, action: MovieAction) -> MovieState {
    match action {
        MovieAction::SetList { category, page } => {
            replace(state.collection_mut(category), page);
            state.loading = false;
            state.error = None;
        }
        MovieAction::AppendList { category, page } => {
            append(state.collection_mut(category), page);
            state.loading = false;
        }
        MovieAction::SetSearchResults(page) => {
            replace(&mut state.search_results, page);
            state.loading = false;
            state.error = None;
        }
        MovieAction::AppendSearchResults(page) => {
            append(&mut state.search_results, page);
            state.loading = false;
        }
        MovieAction::ClearSearch => {
            state.search_results = MovieCollection::default();
        }
        MovieAction::SetGenres(genres) => {
            state.genres = genres;
            state.loading = false;
            state.error = None;
        }
        MovieAction::SetSelected(details) => {
            state.selected = Some(details);
            state.loading = false;
            state.error = None;
        }
        MovieAction::ClearSelected => {
            state.selected = None;
        }
        MovieAction::SetLoading(loading) => {
            state.loading = loading;
        }
        MovieAction::SetError(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        MovieAction::ClearError => {
            state.error = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    fn page(movies: Vec<Movie>, page_no: u32, total_pages: u32) -> Page<Movie> {
        let total = movies.len() as u32 * total_pages;
        Page {
            page: page_no,
            results: movies,
            total_pages,
            total_results: total,
        }
    }

    #[test]
    fn test_set_list_replaces_and_clears_flags() {
        let state = MovieState {
            loading: true,
            error: Some("boom".to_string()),
            ..Default::default()
        };

        let state = reduce(
            state,
            MovieAction::SetList {
                category: MovieCategory::Popular,
                page: page(vec![MockCatalog::movie(1, "Dune")], 1, 5),
            },
        );

        assert_eq!(state.popular.movies.len(), 1);
        assert_eq!(state.popular.current_page, 1);
        assert_eq!(state.popular.total_pages, 5);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        // Other collections untouched
        assert!(state.upcoming.movies.is_empty());
    }

    #[test]
    fn test_set_list_replaces_existing_movies() {
        let state = reduce(
            MovieState::default(),
            MovieAction::SetList {
                category: MovieCategory::Upcoming,
                page: page(vec![MockCatalog::movie(1, "Old")], 1, 1),
            },
        );
        let state = reduce(
            state,
            MovieAction::SetList {
                category: MovieCategory::Upcoming,
                page: page(vec![MockCatalog::movie(2, "New")], 1, 1),
            },
        );

        assert_eq!(state.upcoming.movies.len(), 1);
        assert_eq!(state.upcoming.movies[0].title, "New");
    }

    #[test]
    fn test_append_list_concatenates_and_advances_cursor() {
        let state = reduce(
            MovieState::default(),
            MovieAction::SetList {
                category: MovieCategory::TopRated,
                page: page(vec![MockCatalog::movie(1, "First")], 1, 3),
            },
        );
        let state = reduce(
            state,
            MovieAction::AppendList {
                category: MovieCategory::TopRated,
                page: page(vec![MockCatalog::movie(2, "Second")], 2, 3),
            },
        );

        assert_eq!(state.top_rated.movies.len(), 2);
        assert_eq!(state.top_rated.current_page, 2);
        assert_eq!(state.top_rated.total_pages, 3);
        assert!(state.top_rated.has_more());
    }

    #[test]
    fn test_append_preserves_error() {
        let state = MovieState {
            error: Some("earlier failure".to_string()),
            ..Default::default()
        };
        let state = reduce(
            state,
            MovieAction::AppendList {
                category: MovieCategory::Popular,
                page: page(vec![MockCatalog::movie(3, "Late")], 2, 2),
            },
        );
        assert_eq!(state.error.as_deref(), Some("earlier failure"));
    }

    #[test]
    fn test_search_results_replace_and_append() {
        let state = reduce(
            MovieState::default(),
            MovieAction::SetSearchResults(page(vec![MockCatalog::movie(1, "Alien")], 1, 2)),
        );
        assert_eq!(state.search_results.movies.len(), 1);

        let state = reduce(
            state,
            MovieAction::AppendSearchResults(page(vec![MockCatalog::movie(2, "Aliens")], 2, 2)),
        );
        assert_eq!(state.search_results.movies.len(), 2);
        assert_eq!(state.search_results.current_page, 2);
        assert!(!state.search_results.has_more());
    }

    #[test]
    fn test_clear_search() {
        let state = reduce(
            MovieState::default(),
            MovieAction::SetSearchResults(page(vec![MockCatalog::movie(1, "Alien")], 1, 1)),
        );
        let state = reduce(state, MovieAction::ClearSearch);
        assert_eq!(state.search_results, MovieCollection::default());
    }

    #[test]
    fn test_set_error_clears_loading_only() {
        let state = reduce(
            MovieState::default(),
            MovieAction::SetList {
                category: MovieCategory::Popular,
                page: page(vec![MockCatalog::movie(1, "Dune")], 1, 1),
            },
        );
        let state = reduce(state, MovieAction::SetLoading(true));
        let state = reduce(state, MovieAction::SetError("network down".to_string()));

        assert_eq!(state.error.as_deref(), Some("network down"));
        assert!(!state.loading);
        // Existing data survives a failed refresh
        assert_eq!(state.popular.movies.len(), 1);
    }

    #[test]
    fn test_clear_error() {
        let state = reduce(
            MovieState::default(),
            MovieAction::SetError("boom".to_string()),
        );
        let state = reduce(state, MovieAction::ClearError);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_selected_lifecycle() {
        let details = MovieDetails {
            id: 1,
            title: "Dune".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: 0.0,
            vote_count: 0,
            genres: vec![],
            runtime: Some(155),
            budget: 0,
            revenue: 0,
            status: None,
            tagline: None,
            production_companies: vec![],
        };

        let state = reduce(MovieState::default(), MovieAction::SetSelected(details));
        assert_eq!(state.selected.as_ref().map(|d| d.id), Some(1));

        let state = reduce(state, MovieAction::ClearSelected);
        assert_eq!(state.selected, None);
    }
}
