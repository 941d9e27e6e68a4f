//! Display formatting for the anime detail view.

use crate::models::AnimeRecord;

/// One labeled line of the detail view, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

fn field(label: &'static str, value: String) -> DetailField {
    DetailField { label, value }
}

fn opt(label: &'static str, value: Option<&String>) -> DetailField {
    field(label, value.cloned().unwrap_or_default())
}

/// The ordered detail fields for one record.
///
/// Missing optional values render as empty strings. Values are passed
/// through verbatim (the synopsis may contain markup from the source API).
pub fn detail_fields(record: &AnimeRecord) -> Vec<DetailField> {
    vec![
        field("Title", record.display_title().to_string()),
        opt("Type", record.media_type.as_ref()),
        opt("Format", record.format.as_ref()),
        field(
            "Episodes",
            record.episodes.map(|n| n.to_string()).unwrap_or_default(),
        ),
        opt("Status", record.status.as_ref()),
        field("Genres", record.genres.join(", ")),
        field(
            "Average Score",
            record
                .average_score
                .map(|s| s.to_string())
                .unwrap_or_default(),
        ),
        opt("Synopsis", record.description.as_ref()),
    ]
}

/// The detail view as a single `Label: value` text block.
pub fn details_text(record: &AnimeRecord) -> String {
    detail_fields(record)
        .iter()
        .map(|f| format!("{}: {}", f.label, f.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnimeTitle;

    fn sample() -> AnimeRecord {
        AnimeRecord {
            id: 20,
            title: AnimeTitle {
                romaji: Some("Naruto".into()),
                english: Some("Naruto".into()),
            },
            media_type: Some("ANIME".into()),
            format: Some("TV".into()),
            episodes: Some(220),
            status: Some("FINISHED".into()),
            description: Some("A young ninja.".into()),
            average_score: Some(79),
            genres: vec!["Action".into(), "Drama".into()],
            cover_url: None,
        }
    }

    #[test]
    fn test_field_order_and_values() {
        let fields = detail_fields(&sample());
        let labels: Vec<_> = fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            [
                "Title",
                "Type",
                "Format",
                "Episodes",
                "Status",
                "Genres",
                "Average Score",
                "Synopsis"
            ]
        );
        assert_eq!(fields[3].value, "220");
        assert_eq!(fields[6].value, "79");
    }

    #[test]
    fn test_genres_joined_with_comma() {
        let fields = detail_fields(&sample());
        assert_eq!(fields[5].value, "Action, Drama");
    }

    #[test]
    fn test_missing_episodes_renders_blank() {
        let mut record = sample();
        record.episodes = None;
        record.average_score = None;
        let fields = detail_fields(&record);
        assert_eq!(fields[3].value, "");
        assert_eq!(fields[6].value, "");
    }

    #[test]
    fn test_title_field_uses_display_title() {
        let mut record = sample();
        record.title.english = Some("Attack on Titan".into());
        record.title.romaji = Some("Shingeki no Kyojin".into());
        let fields = detail_fields(&record);
        assert_eq!(fields[0].value, "Attack on Titan");
        assert_eq!(fields[0].value, record.display_title());
    }

    #[test]
    fn test_details_text_block() {
        let mut record = sample();
        record.description = None;
        let text = details_text(&record);
        assert!(text.starts_with("Title: Naruto\nType: ANIME\n"));
        assert!(text.ends_with("Synopsis: "));
    }
}
