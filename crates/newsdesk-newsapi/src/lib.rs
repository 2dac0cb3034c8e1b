//! Typed client for the `NewsAPI` `/v2/everything` search endpoint.
//!
//! Issues a single relevance-sorted search and normalizes the returned
//! articles into [`newsdesk_core::ArticleRecord`] rows, preserving API order.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{EverythingQuery, NewsApiClient};
pub use error::NewsApiError;
pub use normalize::normalize_article;
