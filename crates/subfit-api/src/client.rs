use reqwest::Client;
use url::Url;

use subfit_core::models::Candidate;

use crate::error::{fallback_message, ApiError};
use crate::types::{
    AuthMethod, ErrorResponse, QuotaInfo, QuotaResponse, SearchField, SearchResponse,
};

const BASE_URL: &str = "https://api.subs.ro/v1.0";
const API_KEY_HEADER: &str = "X-Subs-Api-Key";

/// Subtitle search API client.
pub struct SubsClient {
    api_key: String,
    auth: AuthMethod,
    base_url: String,
    http: Client,
}

impl SubsClient {
    pub fn new(api_key: String, auth: AuthMethod) -> Self {
        Self {
            api_key,
            auth,
            base_url: BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a different API root (staging, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search subtitles by field and value, filtered to `language`.
    ///
    /// The value is percent-encoded into the path; all candidate fields pass
    /// through unchanged for the caller to rank.
    pub async fn search(
        &self,
        field: SearchField,
        value: &str,
        language: &str,
    ) -> Result<Vec<Candidate>, ApiError> {
        let url = self.endpoint(&["search", field.as_str(), value])?;
        let request = self
            .apply_auth(self.http.get(url.as_str()))
            .header("Accept", "application/json")
            .query(&[("language", language)]);

        let response = Self::check_response(request.send().await?).await?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        tracing::debug!(
            status = body.status,
            count = body.count,
            request_id = body
                .meta
                .as_ref()
                .and_then(|m| m.request_id.as_deref())
                .unwrap_or(""),
            "search response"
        );
        Ok(body.items)
    }

    /// Fetch the current API quota. Logs a warning when it runs low.
    pub async fn quota(&self) -> Result<QuotaInfo, ApiError> {
        let url = self.endpoint(&["quota"])?;
        let request = self
            .apply_auth(self.http.get(url.as_str()))
            .header("Accept", "application/json");

        let response = Self::check_response(request.send().await?).await?;
        let body: QuotaResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let quota = body.quota;
        if quota.is_low() {
            tracing::warn!(
                remaining = quota.remaining_quota,
                total = quota.total_quota,
                "API quota nearly exhausted"
            );
        }
        Ok(quota)
    }

    /// Download a subtitle package as raw bytes.
    ///
    /// Prefers the item's `downloadLink` when the search result carried one,
    /// otherwise uses the standard download endpoint. This endpoint returns
    /// an octet stream, so no JSON Accept header is sent.
    pub async fn download(&self, id: i64, download_link: Option<&str>) -> Result<Vec<u8>, ApiError> {
        let url = match download_link {
            Some(link) => Url::parse(link).map_err(|e| ApiError::Url(e.to_string()))?,
            None => self.endpoint(&["subtitle", &id.to_string(), "download"])?,
        };
        tracing::debug!(id, url = url.as_str(), "downloading subtitle package");

        let request = self.apply_auth(self.http.get(url.as_str()));
        let response = Self::check_response(request.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth {
            AuthMethod::Header => request.header(API_KEY_HEADER, &self.api_key),
            AuthMethod::Query => request.query(&[("apiKey", self.api_key.as_str())]),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url("base URL cannot be a base".into()))?
            .extend(segments);
        Ok(url)
    }

    /// Map a non-2xx response through the upstream `ErrorResponse` schema,
    /// falling back to local per-status messages.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let parsed: Option<ErrorResponse> = serde_json::from_str(&body).ok();
        let (message, request_id) = match parsed {
            Some(err) => (
                err.message.unwrap_or_else(|| fallback_message(status)),
                err.meta.and_then(|m| m.request_id),
            ),
            None => (fallback_message(status), None),
        };

        tracing::error!(
            status,
            request_id = request_id.as_deref().unwrap_or(""),
            %message,
            "API request failed"
        );
        Err(ApiError::Api {
            status,
            message,
            request_id,
        })
    }
}
