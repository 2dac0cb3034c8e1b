use serde::{Deserialize, Serialize};

/// One article as returned by the news search API, flattened to a fixed
/// column set.
///
/// Field order is the CSV column order. Optional fields serialize as empty
/// cells so every row carries the same columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Publisher name (`source.name` in the API payload).
    pub source: String,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    /// ISO-8601 timestamp, kept verbatim.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Three-way sentiment label derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// An [`ArticleRecord`] plus the text that was scored and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledArticleRecord {
    pub article: ArticleRecord,
    /// `title + ". " + description`, missing parts treated as empty.
    pub text: String,
    pub sentiment: SentimentLabel,
}
