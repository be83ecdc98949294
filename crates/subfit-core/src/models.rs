use serde::{Deserialize, Serialize};

/// One subtitle search result, as delivered by the search service.
///
/// Only `title` feeds the scorer; every other field passes through to the
/// host unchanged. A missing `title` scores as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<ContentKind>,
    #[serde(default)]
    pub translator: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub imdbid: Option<String>,
    #[serde(default)]
    pub tmdbid: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub download_link: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// What kind of content a subtitle covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// Which heuristics fired for one (candidate, reference) pair.
///
/// `None` means the signal was skipped; serialization omits skipped keys.
/// `source_match` and `group_match` are only ever recorded on a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_match: Option<bool>,
    /// Normalized name-similarity ratio, always in [0, 1].
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_translator: Option<bool>,
}

/// Result of scoring one candidate name against a reference name.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Signed total; larger is better.
    pub score: i32,
    pub details: MatchDetails,
}

/// A candidate annotated with its match score. The input record is wrapped,
/// never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_score: i32,
    pub match_details: MatchDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_from_schema_json() {
        let json = r#"{
            "id": 4821,
            "title": "The.Show.S01E01.1080p.WEB-DL-NTb",
            "year": 2023,
            "language": "ro",
            "type": "series",
            "translator": "veverita_bc",
            "imdbid": "tt1234567",
            "tmdbid": 99887,
            "link": "https://example.org/subtitle/4821",
            "downloadLink": "https://example.org/subtitle/4821/download"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, 4821);
        assert_eq!(candidate.kind, Some(ContentKind::Series));
        assert_eq!(
            candidate.download_link.as_deref(),
            Some("https://example.org/subtitle/4821/download")
        );
        assert!(candidate.poster.is_none());
    }

    #[test]
    fn test_missing_title_defaults_to_empty() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(candidate.title, "");
    }

    #[test]
    fn test_details_serialization_omits_skipped_signals() {
        let details = MatchDetails {
            episode_match: Some(true),
            similarity: 0.75,
            ..Default::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["episode_match"], true);
        assert_eq!(map["similarity"], 0.75);
        assert!(!map.contains_key("source_match"));
        assert!(!map.contains_key("group_match"));
    }
}
