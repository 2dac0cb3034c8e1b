//! Valence lexicon and the VADER word lists.
//!
//! The built-in table is the complete VADER valence lexicon (mean human
//! ratings on a -4..=4 scale) as shipped by the `vader_sentiment` crate. A
//! different `vader_lexicon.txt` can be loaded with [`Lexicon::from_file`].

use std::collections::HashMap;
use std::path::Path;

use crate::error::SentimentError;

/// Booster / dampener increment.
pub(crate) const B_INCR: f64 = 0.293;
pub(crate) const B_DECR: f64 = -0.293;

/// Words that scale the valence of a following sentiment word.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerable", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormous", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptional", B_INCR),
    ("exceptionally", B_INCR),
    ("extreme", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredible", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("major", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("total", B_INCR),
    ("totally", B_INCR),
    ("tremendous", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utter", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginal", B_DECR),
    ("marginally", B_DECR),
    ("occasional", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarce", B_DECR),
    ("scarcely", B_DECR),
    ("slight", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// Booster increment for a lowercased word, if it is one.
pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, scalar)| scalar)
}

/// Whether a lowercased word negates what follows it.
pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

/// Word → mean valence table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// The full VADER lexicon compiled into `vader_sentiment`.
    #[must_use]
    pub fn builtin() -> Self {
        let valences = vader_sentiment::LEXICON
            .iter()
            .map(|(word, valence)| ((*word).to_string(), *valence))
            .collect();
        Self { valences }
    }

    /// Parse the `vader_lexicon.txt` format: one `token<TAB>mean[<TAB>...]`
    /// entry per line. Blank lines are skipped; later duplicates win.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconParse`] if a line has no tab-separated
    /// valence or the valence is not a number.
    pub fn parse(content: &str) -> Result<Self, SentimentError> {
        let mut valences = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            let raw = fields.next().ok_or_else(|| SentimentError::LexiconParse {
                line: idx + 1,
                reason: format!("expected `token<TAB>valence`, got {line:?}"),
            })?;
            let valence = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| SentimentError::LexiconParse {
                    line: idx + 1,
                    reason: format!("invalid valence {raw:?}: {e}"),
                })?;
            valences.insert(token.to_string(), valence);
        }
        Ok(Self { valences })
    }

    /// Read and parse a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::LexiconIo`] if the file cannot be read, or
    /// [`SentimentError::LexiconParse`] on a malformed line.
    pub fn from_file(path: &Path) -> Result<Self, SentimentError> {
        let content = std::fs::read_to_string(path).map_err(|e| SentimentError::LexiconIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_the_full_vader_lexicon() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.len() > 7000, "only {} entries", lexicon.len());
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
        assert_eq!(lexicon.get(":)"), Some(2.0));
        for word in ["ugly", "disappointed", "stupid", "smile", "funny"] {
            assert!(lexicon.contains(word), "{word} missing from builtin lexicon");
        }
    }

    #[test]
    fn parse_reads_vader_format() {
        let content = "good\t1.9\t0.9434\t[2, 1, 2, 3, 2]\n\nbad\t-2.5\t0.67082\t[-3, -2]\n";
        let lexicon = Lexicon::parse(content).expect("valid lexicon");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
        assert!(lexicon.get("ugly").is_none());
    }

    #[test]
    fn parse_accepts_two_column_lines() {
        let lexicon = Lexicon::parse("calm\t1.3").expect("valid lexicon");
        assert_eq!(lexicon.get("calm"), Some(1.3));
    }

    #[test]
    fn parse_rejects_missing_valence() {
        let err = Lexicon::parse("good\t1.9\nbroken line\n").unwrap_err();
        assert!(matches!(err, SentimentError::LexiconParse { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_non_numeric_valence() {
        let err = Lexicon::parse("good\tvery").unwrap_err();
        assert!(matches!(err, SentimentError::LexiconParse { line: 1, .. }));
    }

    #[test]
    fn negation_matches_contractions() {
        assert!(is_negation("not"));
        assert!(is_negation("isn't"));
        assert!(is_negation("shouldn't've"));
        assert!(!is_negation("note"));
    }

    #[test]
    fn booster_signs() {
        assert_eq!(booster("very"), Some(B_INCR));
        assert_eq!(booster("slightly"), Some(B_DECR));
        assert_eq!(booster("market"), None);
    }
}
