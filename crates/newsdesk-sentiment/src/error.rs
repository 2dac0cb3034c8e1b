use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read lexicon {path}: {source}")]
    LexiconIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon entry on line {line}: {reason}")]
    LexiconParse { line: usize, reason: String },
}
