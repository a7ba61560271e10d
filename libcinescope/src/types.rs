//! Core types for Cinescope
//!
//! Movie, genre, and video records deserialize verbatim from catalog API
//! responses and are immutable once fetched. Fields the API may omit or
//! null out are `Option`s.

use serde::{Deserialize, Serialize};

/// One paginated catalog response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> Page<T> {
    /// An empty first page, used when clearing a collection
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub adult: bool,
    pub original_language: Option<String>,
    pub original_title: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub video: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A genre enriched with the backdrop of its first discovered movie.
///
/// The backdrop is best effort: a failed discover call leaves it `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreTile {
    pub id: u64,
    pub name: String,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

/// Per-movie details, fetched on demand and held in a single selected slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    pub status: Option<String>,
    pub tagline: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(default)]
    pub size: u32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub official: bool,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    pub id: u64,
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}

/// The four fixed browsing categories of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovieCategory {
    Upcoming,
    Popular,
    TopRated,
    NowPlaying,
}

impl MovieCategory {
    pub const ALL: [MovieCategory; 4] = [
        MovieCategory::Upcoming,
        MovieCategory::Popular,
        MovieCategory::TopRated,
        MovieCategory::NowPlaying,
    ];

    /// Catalog endpoint path for this category
    pub fn endpoint(&self) -> &'static str {
        match self {
            MovieCategory::Upcoming => "/movie/upcoming",
            MovieCategory::Popular => "/movie/popular",
            MovieCategory::TopRated => "/movie/top_rated",
            MovieCategory::NowPlaying => "/movie/now_playing",
        }
    }
}

impl std::fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieCategory::Upcoming => write!(f, "upcoming"),
            MovieCategory::Popular => write!(f, "popular"),
            MovieCategory::TopRated => write!(f, "top rated"),
            MovieCategory::NowPlaying => write!(f, "now playing"),
        }
    }
}

impl std::str::FromStr for MovieCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "upcoming" => Ok(MovieCategory::Upcoming),
            "popular" => Ok(MovieCategory::Popular),
            "top_rated" | "toprated" => Ok(MovieCategory::TopRated),
            "now_playing" | "nowplaying" => Ok(MovieCategory::NowPlaying),
            _ => Err(format!(
                "Invalid category: '{}'. Valid options: upcoming, popular, top-rated, now-playing",
                s
            )),
        }
    }
}

/// Poster width buckets offered by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    W200,
    W300,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W200 => "w200",
            PosterSize::W300 => "w300",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop width buckets offered by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropSize {
    W300,
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}
