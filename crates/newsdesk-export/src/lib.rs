//! CSV sinks for raw and sentiment-labeled article record sets.

pub mod error;
pub mod writer;

pub use error::ExportError;
pub use writer::{
    labeled_file_name, raw_file_name, write_articles, write_labeled_articles, LABELED_COLUMNS,
    RAW_COLUMNS,
};
