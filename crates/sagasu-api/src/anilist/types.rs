use serde::Deserialize;

use sagasu_core::models::{AnimeRecord, AnimeTitle};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: PageData,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    pub media: Vec<AniListMedia>,
}

// ── Media objects ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AniListMedia {
    pub id: u64,
    pub title: Option<AniListTitle>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "averageScore")]
    pub average_score: Option<u32>,
    pub genres: Option<Vec<String>>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImage>,
}

#[derive(Debug, Deserialize)]
pub struct AniListTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverImage {
    #[serde(rename = "extraLarge")]
    pub extra_large: Option<String>,
}

// ── Conversions ──────────────────────────────────────────────────

impl AniListMedia {
    /// Normalize one raw media object into the domain record.
    ///
    /// Enum-like fields pass through verbatim; genre order is the
    /// response order.
    pub fn into_record(self) -> AnimeRecord {
        let title = self.title.map_or_else(AnimeTitle::default, |t| AnimeTitle {
            romaji: t.romaji,
            english: t.english,
        });

        AnimeRecord {
            id: self.id,
            title,
            media_type: self.media_type,
            format: self.format,
            episodes: self.episodes,
            status: self.status,
            description: self.description,
            average_score: self.average_score,
            genres: self.genres.unwrap_or_default(),
            cover_url: self.cover_image.and_then(|c| c.extra_large),
        }
    }
}
