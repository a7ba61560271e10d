//! Trailer resolution
//!
//! The catalog returns a flat video list per movie (trailers, teasers,
//! featurettes, across hosting sites). Playback only supports YouTube, so
//! resolution filters to YouTube videos and prefers an official trailer.

use tracing::warn;

use crate::catalog::CatalogSource;
use crate::types::Video;

/// Pick the best trailer from a movie's video list.
///
/// Preference order: a YouTube video of type "Trailer" that is either
/// flagged official or named like an official trailer, then any YouTube
/// video, then nothing.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    let youtube = |v: &&Video| v.site.eq_ignore_ascii_case("YouTube");

    videos
        .iter()
        .filter(youtube)
        .find(|v| {
            v.kind == "Trailer"
                && (v.official || v.name.to_lowercase().contains("official trailer"))
        })
        .or_else(|| videos.iter().find(youtube))
}

/// Watch page URL for a YouTube video key
pub fn watch_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", key)
}

/// Extract the video id from a YouTube URL, or pass a bare id through.
///
/// Handles `watch?v=` and `youtu.be/` forms; query parameters after the id
/// are stripped.
pub fn extract_video_id(url: &str) -> Option<String> {
    let id = if let Some(rest) = url.split_once("watch?v=").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = url.split_once("youtu.be/").map(|(_, r)| r) {
        rest
    } else if url.contains('/') || url.contains('?') {
        return None;
    } else {
        url
    };

    let id: &str = id.split(&['&', '?'][..]).next().unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Resolved trailer, ready to open in a player
#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    pub name: String,
    pub key: String,
    pub url: String,
}

/// Fetch a movie's videos and resolve its trailer.
///
/// Always answers the question "is there a trailer to play": a movie
/// without a playable trailer and a failed video fetch both come back as
/// `None`, with the failure logged. Callers needing to distinguish the
/// two use [`CatalogSource::videos`] directly.
pub async fn fetch_trailer<S: CatalogSource + ?Sized>(source: &S, movie_id: u64) -> Option<Trailer> {
    let videos = match source.videos(movie_id).await {
        Ok(videos) => videos,
        Err(e) => {
            warn!(movie_id, error = %e, "video fetch failed");
            return None;
        }
    };

    select_trailer(&videos).map(|v| Trailer {
        name: v.name.clone(),
        key: v.key.clone(),
        url: watch_url(&v.key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    fn video(name: &str, site: &str, kind: &str, official: bool) -> Video {
        Video {
            id: format!("id-{}", name),
            key: format!("key-{}", name.replace(' ', "-")),
            name: name.to_string(),
            site: site.to_string(),
            size: 1080,
            kind: kind.to_string(),
            official,
            published_at: None,
        }
    }

    #[test]
    fn test_select_prefers_official_trailer() {
        let videos = vec![
            video("Teaser", "YouTube", "Teaser", true),
            video("Fan Cut", "YouTube", "Trailer", false),
            video("Main Trailer", "YouTube", "Trailer", true),
        ];
        let picked = select_trailer(&videos).unwrap();
        assert_eq!(picked.name, "Main Trailer");
    }

    #[test]
    fn test_select_matches_official_by_name() {
        let videos = vec![
            video("Clip", "YouTube", "Clip", false),
            video("The Official Trailer", "YouTube", "Trailer", false),
        ];
        let picked = select_trailer(&videos).unwrap();
        assert_eq!(picked.name, "The Official Trailer");
    }

    #[test]
    fn test_select_falls_back_to_first_youtube() {
        let videos = vec![
            video("Vimeo Trailer", "Vimeo", "Trailer", true),
            video("Behind the Scenes", "YouTube", "Featurette", false),
            video("Another Clip", "YouTube", "Clip", false),
        ];
        let picked = select_trailer(&videos).unwrap();
        assert_eq!(picked.name, "Behind the Scenes");
    }

    #[test]
    fn test_select_ignores_non_youtube() {
        let videos = vec![video("Vimeo Trailer", "Vimeo", "Trailer", true)];
        assert!(select_trailer(&videos).is_none());
    }

    #[test]
    fn test_select_empty() {
        assert!(select_trailer(&[]).is_none());
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=10"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123"),
            Some("dQw4w9WgXcQ".to_string())
        );
        // Bare id passes through
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(extract_video_id("https://example.com/video"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[tokio::test]
    async fn test_fetch_trailer_resolves() {
        let catalog = MockCatalog::new().with_videos(
            7,
            vec![video("Official Trailer", "YouTube", "Trailer", true)],
        );

        let trailer = fetch_trailer(&catalog, 7).await.unwrap();
        assert_eq!(trailer.name, "Official Trailer");
        assert_eq!(trailer.url, watch_url(&trailer.key));
    }

    #[tokio::test]
    async fn test_fetch_trailer_none_without_videos() {
        let catalog = MockCatalog::new();
        assert!(fetch_trailer(&catalog, 7).await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_trailer_none_on_failure() {
        let catalog = MockCatalog::new().with_videos_failure();
        assert!(fetch_trailer(&catalog, 7).await.is_none());
    }
}
