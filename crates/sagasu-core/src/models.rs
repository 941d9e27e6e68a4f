use serde::{Deserialize, Serialize};

/// A single title with language variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimeTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

/// One normalized search result from the remote service.
///
/// The enum-like fields (`media_type`, `format`, `status`) carry the
/// remote schema's values verbatim; they are opaque strings here and are
/// never checked against a closed set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeRecord {
    pub id: u64,
    pub title: AnimeTitle,
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub average_score: Option<u32>,
    pub genres: Vec<String>,
    pub cover_url: Option<String>,
}

impl AnimeRecord {
    /// The title shown in the result list and the detail view.
    ///
    /// English if non-empty, else romaji, else a fixed placeholder. Both
    /// views go through this method so they always agree.
    pub fn display_title(&self) -> &str {
        self.title
            .english
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.title.romaji.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_titles(romaji: Option<&str>, english: Option<&str>) -> AnimeRecord {
        AnimeRecord {
            id: 1,
            title: AnimeTitle {
                romaji: romaji.map(String::from),
                english: english.map(String::from),
            },
            media_type: None,
            format: None,
            episodes: None,
            status: None,
            description: None,
            average_score: None,
            genres: Vec::new(),
            cover_url: None,
        }
    }

    #[test]
    fn test_display_title_prefers_english() {
        let r = record_with_titles(Some("Shingeki no Kyojin"), Some("Attack on Titan"));
        assert_eq!(r.display_title(), "Attack on Titan");
    }

    #[test]
    fn test_display_title_falls_back_to_romaji() {
        let r = record_with_titles(Some("Sousou no Frieren"), None);
        assert_eq!(r.display_title(), "Sousou no Frieren");
    }

    #[test]
    fn test_display_title_empty_english_counts_as_missing() {
        let r = record_with_titles(Some("Gintama"), Some(""));
        assert_eq!(r.display_title(), "Gintama");
    }

    #[test]
    fn test_display_title_placeholder_when_both_missing() {
        let r = record_with_titles(None, None);
        assert_eq!(r.display_title(), "Untitled");
    }
}
