//! Lexicon-based sentiment labeling for news articles.
//!
//! [`VaderAnalyzer`] produces a VADER-style compound polarity score in
//! `[-1.0, 1.0]`; [`SentimentLabeler`] turns that score into a
//! [`newsdesk_core::SentimentLabel`] for each article. The analyzer is an
//! ordinary value: build it once and hand it to the labeler.

pub mod error;
pub mod labeler;
pub mod lexicon;
pub mod scorer;

pub use error::SentimentError;
pub use labeler::{combined_text, label_for_score, SentimentLabeler};
pub use lexicon::Lexicon;
pub use scorer::{PolarityScorer, VaderAnalyzer};
