use std::path::Path;

use newsdesk_core::{ArticleRecord, LabeledArticleRecord, SentimentLabel};
use serde::Serialize;

use crate::error::ExportError;

/// Header of the raw articles file, in column order.
pub const RAW_COLUMNS: [&str; 7] = [
    "source",
    "author",
    "title",
    "description",
    "content",
    "url",
    "publishedAt",
];

/// Header of the labeled articles file: the raw columns plus `text` and
/// `sentiment`.
pub const LABELED_COLUMNS: [&str; 9] = [
    "source",
    "author",
    "title",
    "description",
    "content",
    "url",
    "publishedAt",
    "text",
    "sentiment",
];

/// Row shape of the labeled file. Field order must match [`LABELED_COLUMNS`].
#[derive(Serialize)]
struct LabeledRow<'a> {
    source: &'a str,
    author: Option<&'a str>,
    title: Option<&'a str>,
    description: Option<&'a str>,
    content: Option<&'a str>,
    url: Option<&'a str>,
    #[serde(rename = "publishedAt")]
    published_at: Option<&'a str>,
    text: &'a str,
    sentiment: SentimentLabel,
}

impl<'a> From<&'a LabeledArticleRecord> for LabeledRow<'a> {
    fn from(record: &'a LabeledArticleRecord) -> Self {
        let article = &record.article;
        Self {
            source: &article.source,
            author: article.author.as_deref(),
            title: article.title.as_deref(),
            description: article.description.as_deref(),
            content: article.content.as_deref(),
            url: article.url.as_deref(),
            published_at: article.published_at.as_deref(),
            text: &record.text,
            sentiment: record.sentiment,
        }
    }
}

/// `news_<date>.csv`
#[must_use]
pub fn raw_file_name(date: &str) -> String {
    format!("news_{date}.csv")
}

/// `news_with_sentiment_<date>.csv`
#[must_use]
pub fn labeled_file_name(date: &str) -> String {
    format!("news_with_sentiment_{date}.csv")
}

/// Write fetched articles to `path` as CSV and return the row count.
///
/// The parent directory is created if missing. The header row is written
/// even when `records` is empty.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory or file cannot be created or a
/// row cannot be written.
pub fn write_articles(path: &Path, records: &[ArticleRecord]) -> Result<usize, ExportError> {
    let rows = write_rows(path, &RAW_COLUMNS, records)?;
    tracing::info!(rows, path = %path.display(), "saved raw articles");
    Ok(rows)
}

/// Write labeled articles to `path` as CSV and return the row count.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory or file cannot be created or a
/// row cannot be written.
pub fn write_labeled_articles(
    path: &Path,
    records: &[LabeledArticleRecord],
) -> Result<usize, ExportError> {
    let rows = write_rows(path, &LABELED_COLUMNS, records.iter().map(LabeledRow::from))?;
    tracing::info!(rows, path = %path.display(), "saved sentiment-labeled articles");
    Ok(rows)
}

fn write_rows<I>(path: &Path, header: &[&str], rows: I) -> Result<usize, ExportError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    ensure_parent_dir(path)?;

    // Header is written by hand; serde-driven headers only appear once the
    // first row is serialized.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;

    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }

    writer.flush().map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(count)
}

fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
                path: dir.display().to_string(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
