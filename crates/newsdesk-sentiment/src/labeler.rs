//! Maps compound scores to three-way article labels.

use newsdesk_core::{ArticleRecord, LabeledArticleRecord, SentimentLabel};

use crate::scorer::PolarityScorer;

/// Scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Label for a compound score. Both thresholds are inclusive.
#[must_use]
pub fn label_for_score(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// `title + ". " + description`, with a missing part treated as empty.
#[must_use]
pub fn combined_text(title: Option<&str>, description: Option<&str>) -> String {
    format!(
        "{}. {}",
        title.unwrap_or_default(),
        description.unwrap_or_default()
    )
}

/// Labels articles with a borrowed or owned [`PolarityScorer`].
#[derive(Debug, Clone)]
pub struct SentimentLabeler<S> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentLabeler<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Label for `text`. `None` is neutral and never reaches the scorer.
    pub fn analyze_sentiment(&self, text: Option<&str>) -> SentimentLabel {
        match text {
            Some(text) => label_for_score(self.scorer.compound(text)),
            None => SentimentLabel::Neutral,
        }
    }

    pub fn label_article(&self, article: ArticleRecord) -> LabeledArticleRecord {
        let text = combined_text(article.title.as_deref(), article.description.as_deref());
        let sentiment = self.analyze_sentiment(Some(&text));
        LabeledArticleRecord {
            article,
            text,
            sentiment,
        }
    }

    /// Labels every article, keeping input order.
    pub fn label_articles<I>(&self, articles: I) -> Vec<LabeledArticleRecord>
    where
        I: IntoIterator<Item = ArticleRecord>,
    {
        let labeled: Vec<LabeledArticleRecord> = articles
            .into_iter()
            .map(|article| self.label_article(article))
            .collect();
        tracing::debug!(rows = labeled.len(), "labeled articles");
        labeled
    }
}
