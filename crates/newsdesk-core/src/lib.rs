//! Shared types and configuration for the newsdesk workspace.

pub mod app_config;
pub mod articles;
pub mod config;

pub use app_config::AppConfig;
pub use articles::{ArticleRecord, LabeledArticleRecord, SentimentLabel};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
