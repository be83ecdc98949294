use serde::Deserialize;

use subfit_core::models::Candidate;

/// Fraction of the quota below which a warning is emitted.
const LOW_QUOTA_RATIO: f64 = 0.1;

/// Envelope for `GET /search/{field}/{value}`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: u16,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub items: Vec<Candidate>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Envelope for `GET /quota`.
#[derive(Debug, Deserialize)]
pub struct QuotaResponse {
    pub quota: QuotaInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotaInfo {
    #[serde(default)]
    pub total_quota: u64,
    #[serde(default)]
    pub used_quota: u64,
    #[serde(default)]
    pub remaining_quota: u64,
    #[serde(default)]
    pub quota_type: Option<String>,
}

impl QuotaInfo {
    /// True when less than a tenth of the quota remains.
    pub fn is_low(&self) -> bool {
        self.total_quota > 0
            && (self.remaining_quota as f64) < self.total_quota as f64 * LOW_QUOTA_RATIO
    }
}

/// Error body, per the upstream `ErrorResponse` schema.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

/// Which index the search endpoint queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    ImdbId,
    TmdbId,
    Title,
    Release,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImdbId => "imdbid",
            Self::TmdbId => "tmdbid",
            Self::Title => "title",
            Self::Release => "release",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the API key travels with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// `X-Subs-Api-Key` request header.
    #[default]
    Header,
    /// `apiKey` query parameter.
    Query,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserializes() {
        let json = r#"{
            "status": 200,
            "count": 2,
            "items": [
                {"id": 1, "title": "Show.S01E01.720p.HDTV", "language": "ro"},
                {"id": 2, "title": "Show.S01E01.1080p.WEB-DL", "downloadLink": "https://x/dl"}
            ],
            "meta": {"requestId": "req-42"}
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.count, 2);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[1].download_link.as_deref(), Some("https://x/dl"));
        assert_eq!(
            response.meta.unwrap().request_id.as_deref(),
            Some("req-42")
        );
    }

    #[test]
    fn test_error_response_deserializes() {
        let json = r#"{"status": 401, "message": "bad key", "meta": {"requestId": "r1"}}"#;
        let err: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.status, Some(401));
        assert_eq!(err.message.as_deref(), Some("bad key"));
        assert_eq!(err.meta.unwrap().request_id.as_deref(), Some("r1"));
    }

    #[test]
    fn test_quota_low_threshold() {
        let quota = |remaining| QuotaInfo {
            total_quota: 100,
            used_quota: 100 - remaining,
            remaining_quota: remaining,
            quota_type: None,
        };
        assert!(quota(9).is_low());
        assert!(!quota(10).is_low());
        // Unknown totals never warn.
        assert!(!QuotaInfo {
            total_quota: 0,
            used_quota: 0,
            remaining_quota: 0,
            quota_type: None
        }
        .is_low());
    }

    #[test]
    fn test_search_field_path_segments() {
        assert_eq!(SearchField::ImdbId.as_str(), "imdbid");
        assert_eq!(SearchField::TmdbId.as_str(), "tmdbid");
        assert_eq!(SearchField::Title.as_str(), "title");
        assert_eq!(SearchField::Release.as_str(), "release");
    }
}
