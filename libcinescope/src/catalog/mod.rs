//! Catalog API abstraction and HTTP client
//!
//! The catalog is a remote REST service providing movie lists, details,
//! videos, search, and genre data. `CatalogSource` is the seam the state
//! containers and tools depend on; `CatalogClient` is the real HTTP
//! implementation and `MockCatalog` a configurable stand-in for tests.
//!
//! The client is pure request/response mapping: no retries, no backoff,
//! no request deduplication.

use async_trait::async_trait;
use tracing::warn;

use crate::error::CatalogError;
use crate::types::{Genre, GenreTile, Movie, MovieCategory, MovieDetails, Page, Video};

pub mod client;

// Mock catalog is available for all builds (not just tests) to support
// integration tests in dependent crates
pub mod mock;

pub use client::CatalogClient;
pub use mock::MockCatalog;

/// Unified interface to the movie catalog.
///
/// "No data" conditions are not errors: an empty results page or a movie
/// without videos come back as empty collections. Errors are reserved for
/// transport, decode, and API-level failures.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of a fixed browsing category
    async fn list(&self, category: MovieCategory, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Fetch full details for one movie
    async fn details(&self, movie_id: u64) -> Result<MovieDetails, CatalogError>;

    /// Fetch the video list (trailers, teasers, clips) for one movie
    async fn videos(&self, movie_id: u64) -> Result<Vec<Video>, CatalogError>;

    /// Search movies by title
    async fn search(&self, query: &str, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Discover movies belonging to a genre
    async fn discover_by_genre(
        &self,
        genre_id: u64,
        page: u32,
    ) -> Result<Page<Movie>, CatalogError>;

    /// Fetch the genre index
    async fn genres(&self) -> Result<Vec<Genre>, CatalogError>;

    /// Fetch the genre index and enrich each genre with the backdrop path
    /// of its first discovered movie.
    ///
    /// One discover request per genre, sequential, uncached. Per-genre
    /// failures degrade to a tile without a backdrop rather than failing
    /// the whole call.
    async fn genres_with_backdrops(&self) -> Result<Vec<GenreTile>, CatalogError> {
        let genres = self.genres().await?;
        let mut tiles = Vec::with_capacity(genres.len());

        for genre in genres {
            let backdrop_path = match self.discover_by_genre(genre.id, 1).await {
                Ok(page) => page.results.first().and_then(|m| m.backdrop_path.clone()),
                Err(e) => {
                    warn!(genre = %genre.name, error = %e, "genre backdrop lookup failed");
                    None
                }
            };

            tiles.push(GenreTile {
                id: genre.id,
                name: genre.name,
                backdrop_path,
            });
        }

        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::MockCatalog;

    #[tokio::test]
    async fn test_genres_with_backdrops_enrichment() {
        let catalog = MockCatalog::new()
            .with_genres(vec![
                Genre {
                    id: 28,
                    name: "Action".to_string(),
                },
                Genre {
                    id: 35,
                    name: "Comedy".to_string(),
                },
            ])
            .with_discover_page(28, MockCatalog::page_of(vec![MockCatalog::movie(1, "Heat")]))
            .with_discover_page(35, Page::empty());

        let tiles = catalog.genres_with_backdrops().await.unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].name, "Action");
        assert_eq!(tiles[0].backdrop_path.as_deref(), Some("/backdrop-1.jpg"));
        // No movies discovered for the genre, so no backdrop
        assert_eq!(tiles[1].backdrop_path, None);
    }

    #[tokio::test]
    async fn test_genres_with_backdrops_survives_discover_failure() {
        let catalog = MockCatalog::new()
            .with_genres(vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }])
            .with_discover_failure(28);

        let tiles = catalog.genres_with_backdrops().await.unwrap();

        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].backdrop_path, None);
    }

    #[tokio::test]
    async fn test_genres_with_backdrops_fails_when_index_fails() {
        let catalog = MockCatalog::new().with_genres_failure();

        assert!(catalog.genres_with_backdrops().await.is_err());
    }
}
