//! Search-session state: the last query and the result set it produced.
//!
//! The UI shell owns one `SearchSession` and resolves every selection
//! against it, so a selection never triggers a second network call and
//! never races a result set the user is no longer looking at.

use crate::error::CoreError;
use crate::models::AnimeRecord;

/// Resolve a selection index against a result set.
///
/// Pure lookup. An invalid index is an internal consistency fault (the UI
/// binding must keep displayed and underlying indices in sync), so it is
/// reported as an error rather than silently ignored.
pub fn resolve(results: &[AnimeRecord], index: usize) -> Result<&AnimeRecord, CoreError> {
    results.get(index).ok_or(CoreError::Selection {
        index,
        len: results.len(),
    })
}

/// The query and result set of the most recent search.
#[derive(Debug, Default)]
pub struct SearchSession {
    last_query: String,
    results: Vec<AnimeRecord>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole session with a fresh search outcome.
    ///
    /// The previous result set is dropped entirely; results are kept in
    /// remote response order, with no re-sorting or de-duplication.
    pub fn replace(&mut self, query: String, results: Vec<AnimeRecord>) {
        tracing::debug!(query = %query, results = results.len(), "search session replaced");
        self.last_query = query;
        self.results = results;
    }

    /// Resolve a selection against this session's result set.
    pub fn selected(&self, index: usize) -> Result<&AnimeRecord, CoreError> {
        resolve(&self.results, index)
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn results(&self) -> &[AnimeRecord] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnimeTitle;

    fn record(id: u64, romaji: &str) -> AnimeRecord {
        AnimeRecord {
            id,
            title: AnimeTitle {
                romaji: Some(romaji.into()),
                english: None,
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
    fn test_resolve_returns_record_at_index() {
        let results = vec![record(1, "A"), record(2, "B"), record(3, "C")];
        let found = resolve(&results, 1).unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_resolve_rejects_index_past_end() {
        let results = vec![record(1, "A"), record(2, "B")];
        let err = resolve(&results, 2).unwrap_err();
        match err {
            CoreError::Selection { index, len } => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_on_empty_set() {
        assert!(resolve(&[], 0).is_err());
    }

    #[test]
    fn test_replace_drops_previous_results() {
        let mut session = SearchSession::new();
        session.replace("naruto".into(), vec![record(1, "Naruto"), record(2, "Boruto")]);
        assert_eq!(session.len(), 2);
        assert_eq!(session.last_query(), "naruto");

        session.replace("frieren".into(), vec![record(3, "Sousou no Frieren")]);
        assert_eq!(session.len(), 1);
        assert_eq!(session.selected(0).unwrap().id, 3);
        assert!(session.selected(1).is_err());
    }
}
