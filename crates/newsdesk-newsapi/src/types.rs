//! `NewsAPI` response types.
//!
//! Successful responses look like
//! `{"status": "ok", "totalResults": 42, "articles": [...]}`; failures carry
//! `{"status": "error", "code": "...", "message": "..."}`.

use serde::Deserialize;

/// Envelope for `GET /v2/everything`.
#[derive(Debug, Deserialize)]
pub struct EverythingResponse {
    pub status: String,
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<ApiArticle>,
}

/// A single article as delivered by the API. Every field except the source
/// name may be `null` or absent.
#[derive(Debug, Deserialize)]
pub struct ApiArticle {
    pub source: ApiSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Body of an error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
