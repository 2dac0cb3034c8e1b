use newsdesk_core::ArticleRecord;

use crate::types::ApiArticle;

/// Flatten an API article into the fixed-column record.
///
/// Optional fields are carried over as-is; nothing is trimmed or parsed.
#[must_use]
pub fn normalize_article(article: ApiArticle) -> ArticleRecord {
    ArticleRecord {
        source: article.source.name,
        author: article.author,
        title: article.title,
        description: article.description,
        content: article.content,
        url: article.url,
        published_at: article.published_at,
    }
}
