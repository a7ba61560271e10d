//! HTTP client for the catalog API

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::catalog::CatalogSource;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{
    Genre, GenreListResponse, Movie, MovieCategory, MovieDetails, Page, Video, VideoListResponse,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote movie catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Issue one GET request and decode the JSON body.
    ///
    /// The API key and language ride along on every request; 401 maps to
    /// `CatalogError::ApiKey`, other non-2xx statuses to `CatalogError::Status`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::ApiKey);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list(&self, category: MovieCategory, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json(
            category.endpoint(),
            &[
                ("page", page.to_string()),
                ("region", self.config.region.clone()),
            ],
        )
        .await
    }

    async fn details(&self, movie_id: u64) -> Result<MovieDetails, CatalogError> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }

    async fn videos(&self, movie_id: u64) -> Result<Vec<Video>, CatalogError> {
        let response: VideoListResponse = self
            .get_json(&format!("/movie/{}/videos", movie_id), &[])
            .await?;
        Ok(response.results)
    }

    async fn search(&self, query: &str, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("include_adult", "false".to_string()),
            ],
        )
        .await
    }

    async fn discover_by_genre(
        &self,
        genre_id: u64,
        page: u32,
    ) -> Result<Page<Movie>, CatalogError> {
        self.get_json(
            "/discover/movie",
            &[
                ("with_genres", genre_id.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let response: GenreListResponse = self.get_json("/genre/movie/list", &[]).await?;
        Ok(response.genres)
    }
}
