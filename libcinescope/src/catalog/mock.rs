//! Mock catalog implementation for testing
//!
//! A configurable in-memory catalog used by the state container tests and
//! by dependent crates. Responses are seeded per endpoint; unseeded
//! endpoints return empty data, and any endpoint can be flipped to fail.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalog::CatalogSource;
use crate::error::CatalogError;
use crate::types::{Genre, Movie, MovieCategory, MovieDetails, Page, Video};

#[derive(Default)]
struct MockData {
    lists: HashMap<(MovieCategory, u32), Page<Movie>>,
    details: HashMap<u64, MovieDetails>,
    videos: HashMap<u64, Vec<Video>>,
    search_pages: HashMap<u32, Page<Movie>>,
    discover_pages: HashMap<u64, Page<Movie>>,
    genres: Vec<Genre>,
    fail_lists: bool,
    fail_search: bool,
    fail_details: bool,
    fail_videos: bool,
    fail_genres: bool,
    fail_discover_for: Vec<u64>,
}

/// Mock catalog for tests
#[derive(Clone, Default)]
pub struct MockCatalog {
    data: Arc<Mutex<MockData>>,
    call_count: Arc<Mutex<usize>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A throwaway movie with derived image paths, for seeding responses
    pub fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: format!("Overview of {}", title),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            backdrop_path: Some(format!("/backdrop-{}.jpg", id)),
            release_date: Some("2024-01-01".to_string()),
            vote_average: 7.0,
            vote_count: 100,
            genre_ids: vec![28],
            adult: false,
            original_language: Some("en".to_string()),
            original_title: Some(title.to_string()),
            popularity: 10.0,
            video: false,
        }
    }

    /// Wrap movies into a single-page response
    pub fn page_of(movies: Vec<Movie>) -> Page<Movie> {
        let total = movies.len() as u32;
        Page {
            page: 1,
            results: movies,
            total_pages: 1,
            total_results: total,
        }
    }

    pub fn with_list_page(self, category: MovieCategory, page: u32, data: Page<Movie>) -> Self {
        self.data.lock().unwrap().lists.insert((category, page), data);
        self
    }

    pub fn with_search_page(self, page: u32, data: Page<Movie>) -> Self {
        self.data.lock().unwrap().search_pages.insert(page, data);
        self
    }

    pub fn with_discover_page(self, genre_id: u64, data: Page<Movie>) -> Self {
        self.data.lock().unwrap().discover_pages.insert(genre_id, data);
        self
    }

    pub fn with_details(self, details: MovieDetails) -> Self {
        self.data.lock().unwrap().details.insert(details.id, details);
        self
    }

    pub fn with_videos(self, movie_id: u64, videos: Vec<Video>) -> Self {
        self.data.lock().unwrap().videos.insert(movie_id, videos);
        self
    }

    pub fn with_genres(self, genres: Vec<Genre>) -> Self {
        self.data.lock().unwrap().genres = genres;
        self
    }

    pub fn with_list_failure(self) -> Self {
        self.data.lock().unwrap().fail_lists = true;
        self
    }

    pub fn with_search_failure(self) -> Self {
        self.data.lock().unwrap().fail_search = true;
        self
    }

    pub fn with_details_failure(self) -> Self {
        self.data.lock().unwrap().fail_details = true;
        self
    }

    pub fn with_videos_failure(self) -> Self {
        self.data.lock().unwrap().fail_videos = true;
        self
    }

    pub fn with_genres_failure(self) -> Self {
        self.data.lock().unwrap().fail_genres = true;
        self
    }

    pub fn with_discover_failure(self, genre_id: u64) -> Self {
        self.data.lock().unwrap().fail_discover_for.push(genre_id);
        self
    }

    /// Total number of requests issued against this mock
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Search queries received, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn failure(endpoint: &str) -> CatalogError {
        CatalogError::Status {
            status: 500,
            endpoint: endpoint.to_string(),
        }
    }

    fn record_call(&self) {
        *self.call_count.lock().unwrap() += 1;
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn list(&self, category: MovieCategory, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.record_call();
        let data = self.data.lock().unwrap();
        if data.fail_lists {
            return Err(Self::failure(category.endpoint()));
        }
        Ok(data
            .lists
            .get(&(category, page))
            .cloned()
            .unwrap_or_else(Page::empty))
    }

    async fn details(&self, movie_id: u64) -> Result<MovieDetails, CatalogError> {
        self.record_call();
        let data = self.data.lock().unwrap();
        if data.fail_details {
            return Err(Self::failure("/movie/{id}"));
        }
        data.details
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| CatalogError::Status {
                status: 404,
                endpoint: format!("/movie/{}", movie_id),
            })
    }

    async fn videos(&self, movie_id: u64) -> Result<Vec<Video>, CatalogError> {
        self.record_call();
        let data = self.data.lock().unwrap();
        if data.fail_videos {
            return Err(Self::failure("/movie/{id}/videos"));
        }
        Ok(data.videos.get(&movie_id).cloned().unwrap_or_default())
    }

    async fn search(&self, query: &str, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.record_call();
        self.queries.lock().unwrap().push(query.to_string());
        let data = self.data.lock().unwrap();
        if data.fail_search {
            return Err(Self::failure("/search/movie"));
        }
        Ok(data
            .search_pages
            .get(&page)
            .cloned()
            .unwrap_or_else(Page::empty))
    }

    async fn discover_by_genre(
        &self,
        genre_id: u64,
        page: u32,
    ) -> Result<Page<Movie>, CatalogError> {
        self.record_call();
        let data = self.data.lock().unwrap();
        if data.fail_discover_for.contains(&genre_id) {
            return Err(Self::failure("/discover/movie"));
        }
        if page != 1 {
            return Ok(Page::empty());
        }
        Ok(data
            .discover_pages
            .get(&genre_id)
            .cloned()
            .unwrap_or_else(Page::empty))
    }

    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        self.record_call();
        let data = self.data.lock().unwrap();
        if data.fail_genres {
            return Err(Self::failure("/genre/movie/list"));
        }
        Ok(data.genres.clone())
    }
}
