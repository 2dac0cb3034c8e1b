//! HTTP client for the `NewsAPI` REST API.
//!
//! Wraps `reqwest` with API key handling, query-string construction, and typed
//! response decoding. Every response body is checked for the
//! `"status": "error"` envelope before the HTTP status, so upstream auth and
//! rate-limit messages surface as [`NewsApiError::Api`].

use std::time::Duration;

use newsdesk_core::ArticleRecord;
use reqwest::{Client, Url};

use crate::error::NewsApiError;
use crate::normalize::normalize_article;
use crate::types::{ApiErrorBody, EverythingResponse};

const USER_AGENT: &str = "newsdesk/0.1 (news-sentiment)";
const API_KEY_HEADER: &str = "X-Api-Key";
const SORT_BY: &str = "relevancy";

/// Filters for a single `/everything` search.
///
/// Values are sent as given. `None` fields are left out of the query string,
/// so the upstream defaults apply (an unset `to` means no upper date bound
/// from our side).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EverythingQuery {
    /// Keywords or boolean expression, e.g. `"AI OR politics"`.
    pub query: Option<String>,
    /// Comma-separated source ids, e.g. `"bbc-news,cnn"`.
    pub sources: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub language: String,
    /// Upstream caps this at 100.
    pub page_size: u32,
}

impl Default for EverythingQuery {
    fn default() -> Self {
        Self {
            query: None,
            sources: None,
            from: None,
            to: None,
            language: "en".to_string(),
            page_size: 100,
        }
    }
}

impl EverythingQuery {
    /// Query-string pairs in the order they are sent.
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(7);
        if let Some(q) = &self.query {
            params.push(("q", q.clone()));
        }
        if let Some(sources) = &self.sources {
            params.push(("sources", sources.clone()));
        }
        params.push(("language", self.language.clone()));
        if let Some(from) = &self.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            params.push(("to", to.clone()));
        }
        params.push(("sortBy", SORT_BY.to_string()));
        params.push(("pageSize", self.page_size.to_string()));
        params
    }
}

/// Client for the `NewsAPI` REST API.
///
/// The base URL comes from configuration
/// ([`newsdesk_core::config::DEFAULT_NEWSAPI_BASE_URL`] unless overridden), so
/// tests can point the client at a mock server.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Exactly one trailing slash, so joining "everything" appends a path
        // segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| NewsApiError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one relevance-sorted search and returns the articles in API order.
    ///
    /// Only the first page is requested.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Api`] if the API returns an error envelope
    ///   (bad key, rate limit, bad parameters).
    /// - [`NewsApiError::Http`] on network failure or timeout.
    /// - [`NewsApiError::UnexpectedStatus`] on a non-2xx status without an
    ///   error envelope.
    /// - [`NewsApiError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_everything(
        &self,
        query: &EverythingQuery,
    ) -> Result<Vec<ArticleRecord>, NewsApiError> {
        let params = query.to_params();
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let url = self.build_url("everything", &pairs)?;

        tracing::debug!(
            query = query.query.as_deref().unwrap_or(""),
            sources = query.sources.as_deref().unwrap_or(""),
            from = query.from.as_deref().unwrap_or(""),
            to = query.to.as_deref().unwrap_or(""),
            language = %query.language,
            page_size = query.page_size,
            "searching NewsAPI"
        );

        let body = self.request_json(&url).await?;
        let envelope: EverythingResponse =
            serde_json::from_value(body).map_err(|e| NewsApiError::Deserialize {
                context: "everything".to_string(),
                source: e,
            })?;

        tracing::debug!(
            status = %envelope.status,
            total_results = envelope.total_results,
            returned = envelope.articles.len(),
            "NewsAPI search complete"
        );

        Ok(envelope
            .articles
            .into_iter()
            .map(normalize_article)
            .collect())
    }

    /// Builds the endpoint URL with percent-encoded query parameters.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, NewsApiError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| NewsApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends an authenticated GET and returns the parsed JSON body.
    ///
    /// The error envelope is checked before the HTTP status so that a 401 or
    /// 429 reports the upstream `code` and `message`.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, NewsApiError> {
        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<serde_json::Value>(&body);
        if let Ok(value) = &parsed {
            Self::check_api_error(status.as_u16(), value)?;
        }

        if !status.is_success() {
            return Err(NewsApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        parsed.map_err(|e| NewsApiError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    fn check_api_error(status: u16, body: &serde_json::Value) -> Result<(), NewsApiError> {
        if body.get("status").and_then(serde_json::Value::as_str) != Some("error") {
            return Ok(());
        }
        let error = serde_json::from_value::<ApiErrorBody>(body.clone()).ok();
        let code = error
            .as_ref()
            .and_then(|e| e.code.clone())
            .unwrap_or_else(|| "unknown".to_string());
        let message = error
            .and_then(|e| e.message)
            .unwrap_or_else(|| "unknown error".to_string());
        Err(NewsApiError::Api {
            status,
            code,
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
