//! Fetch → save raw → label → save labeled.

use std::path::PathBuf;

use newsdesk_core::{ArticleRecord, LabeledArticleRecord, SentimentLabel};
use newsdesk_export::{labeled_file_name, raw_file_name, write_articles, write_labeled_articles};
use newsdesk_newsapi::{EverythingQuery, NewsApiClient};
use newsdesk_sentiment::{PolarityScorer, SentimentLabeler};

const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub query: EverythingQuery,
    pub data_dir: PathBuf,
    /// Date stamp for both output file names.
    pub date: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    fn tally(records: &[LabeledArticleRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            match record.sentiment {
                SentimentLabel::Positive => counts.positive += 1,
                SentimentLabel::Negative => counts.negative += 1,
                SentimentLabel::Neutral => counts.neutral += 1,
            }
            counts
        })
    }
}

#[derive(Debug)]
pub(crate) struct RunSummary {
    pub raw_path: PathBuf,
    pub raw_rows: usize,
    pub labeled_path: PathBuf,
    pub labeled_rows: usize,
    pub counts: LabelCounts,
}

/// Run one fetch, one labeling pass and both writes.
///
/// Any failure aborts the run; nothing fetched so far is kept beyond what
/// was already written.
///
/// # Errors
///
/// Returns an error if the search request fails or either file cannot be
/// written.
pub(crate) async fn run_pipeline<S: PolarityScorer>(
    client: &NewsApiClient,
    labeler: &SentimentLabeler<S>,
    options: &RunOptions,
) -> anyhow::Result<RunSummary> {
    let articles = client.search_everything(&options.query).await?;
    tracing::info!(count = articles.len(), "fetched articles");
    print_article_preview(&articles);

    let raw_path = options.data_dir.join(raw_file_name(&options.date));
    let raw_rows = write_articles(&raw_path, &articles)?;
    println!("Saved {raw_rows} articles to {}", raw_path.display());

    let labeled = labeler.label_articles(articles);
    let labeled_path = options.data_dir.join(labeled_file_name(&options.date));
    let labeled_rows = write_labeled_articles(&labeled_path, &labeled)?;
    println!(
        "Saved {labeled_rows} sentiment-labeled articles to {}",
        labeled_path.display()
    );

    let counts = LabelCounts::tally(&labeled);
    print_label_preview(&labeled, counts);

    Ok(RunSummary {
        raw_path,
        raw_rows,
        labeled_path,
        labeled_rows,
        counts,
    })
}

fn print_article_preview(articles: &[ArticleRecord]) {
    for article in articles.iter().take(PREVIEW_ROWS) {
        println!(
            "{:<24} {}",
            article.source,
            article.title.as_deref().unwrap_or("")
        );
    }
}

fn print_label_preview(labeled: &[LabeledArticleRecord], counts: LabelCounts) {
    for record in labeled.iter().take(PREVIEW_ROWS) {
        println!(
            "{:<10} {}",
            record.sentiment,
            record.article.title.as_deref().unwrap_or("")
        );
    }
    println!(
        "positive: {}, negative: {}, neutral: {}",
        counts.positive, counts.negative, counts.neutral
    );
}
