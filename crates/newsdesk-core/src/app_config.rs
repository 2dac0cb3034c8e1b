use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub news_api_key: String,
    pub newsapi_base_url: String,
    pub request_timeout_secs: u64,
    /// Directory that receives both CSV outputs.
    pub data_dir: PathBuf,
    pub log_level: String,
    /// Optional VADER lexicon file; the built-in lexicon is used when unset.
    pub vader_lexicon_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("news_api_key", &"[redacted]")
            .field("newsapi_base_url", &self.newsapi_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("data_dir", &self.data_dir)
            .field("log_level", &self.log_level)
            .field("vader_lexicon_path", &self.vader_lexicon_path)
            .finish()
    }
}
