mod run;

use clap::Parser;
use newsdesk_newsapi::{EverythingQuery, NewsApiClient};
use newsdesk_sentiment::{SentimentLabeler, VaderAnalyzer};
use tracing_subscriber::EnvFilter;

use crate::run::{run_pipeline, RunOptions};

const DEFAULT_QUERY: &str = "AI OR politics OR economy";

#[derive(Debug, Parser)]
#[command(name = "newsdesk")]
#[command(about = "Fetch news articles, label their sentiment, and save both as CSV")]
struct Cli {
    /// Keywords or boolean query; defaults to "AI OR politics OR economy"
    /// when neither --query nor --sources is given
    #[arg(long)]
    query: Option<String>,

    /// Comma-separated source ids, e.g. "bbc-news,cnn"
    #[arg(long)]
    sources: Option<String>,

    /// Oldest publish date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    from: Option<String>,

    /// Newest publish date (YYYY-MM-DD); left to the API when unset
    #[arg(long)]
    to: Option<String>,

    /// Two-letter language code
    #[arg(long, default_value = "en")]
    language: String,

    /// Articles to request (the API allows at most 100)
    #[arg(long, default_value_t = 100)]
    page_size: u32,

    /// Date stamp used in output file names; defaults to today
    #[arg(long)]
    date: Option<String>,
}

impl Cli {
    fn into_query(self, today: &str) -> (EverythingQuery, String) {
        let query = match (self.query, &self.sources) {
            (None, None) => Some(DEFAULT_QUERY.to_string()),
            (query, _) => query,
        };
        let date = self.date.unwrap_or_else(|| today.to_string());
        let search = EverythingQuery {
            query,
            sources: self.sources,
            from: Some(self.from.unwrap_or_else(|| today.to_string())),
            to: self.to,
            language: self.language,
            page_size: self.page_size,
        };
        (search, date)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = newsdesk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "loaded configuration");

    let analyzer = match &config.vader_lexicon_path {
        Some(path) => VaderAnalyzer::from_lexicon_file(path)?,
        None => VaderAnalyzer::builtin(),
    };
    let labeler = SentimentLabeler::new(&analyzer);

    let client = NewsApiClient::with_base_url(
        &config.news_api_key,
        config.request_timeout_secs,
        &config.newsapi_base_url,
    )?;

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let (query, date) = cli.into_query(&today);
    let options = RunOptions {
        query,
        data_dir: config.data_dir.clone(),
        date,
    };

    let summary = run_pipeline(&client, &labeler, &options).await?;
    tracing::info!(
        raw_rows = summary.raw_rows,
        raw_path = %summary.raw_path.display(),
        labeled_rows = summary.labeled_rows,
        labeled_path = %summary.labeled_path.display(),
        positive = summary.counts.positive,
        negative = summary.counts.negative,
        neutral = summary.counts.neutral,
        "run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests;
