//! VADER compound polarity scoring.

use std::path::Path;

use crate::error::SentimentError;
use crate::lexicon::{booster, is_negation, Lexicon};

/// ALL-CAPS emphasis increment.
const C_INCR: f64 = 0.733;
/// Negation multiplier.
const N_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected raw score.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;

/// Anything that maps text to a compound polarity score in `[-1.0, 1.0]`.
pub trait PolarityScorer {
    fn compound(&self, text: &str) -> f64;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for &T {
    fn compound(&self, text: &str) -> f64 {
        (**self).compound(text)
    }
}

/// Rule-based VADER analyzer over a valence [`Lexicon`].
#[derive(Debug, Clone)]
pub struct VaderAnalyzer {
    lexicon: Lexicon,
}

impl VaderAnalyzer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Analyzer over the full built-in VADER lexicon.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// Analyzer over a `vader_lexicon.txt`-format file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the file cannot be read or parsed.
    pub fn from_lexicon_file(path: &Path) -> Result<Self, SentimentError> {
        let lexicon = Lexicon::from_file(path)?;
        tracing::debug!(path = %path.display(), entries = lexicon.len(), "loaded VADER lexicon");
        Ok(Self::new(lexicon))
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Valence of the token at `i` after caps, booster, negation and `least`
    /// adjustments.
    fn sentiment_valence(
        &self,
        tokens: &[&str],
        lowered: &[String],
        i: usize,
        cap_diff: bool,
    ) -> f64 {
        let Some(base) = self.lexicon.get(&lowered[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another sentiment word only negates it.
        if lowered[i] == "no"
            && lowered
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains(next))
        {
            valence = 0.0;
        }
        let after_no = (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"));
        if after_no {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_all_caps(tokens[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&lowered[prev]) {
                continue;
            }
            let mut scalar = scalar_inc_dec(tokens[prev], &lowered[prev], valence, cap_diff);
            match start_i {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = negation_check(valence, lowered, start_i, i);
        }

        self.least_check(valence, lowered, i)
    }

    /// "least" flips the word after it, except in "at least" / "very least".
    fn least_check(&self, valence: f64, lowered: &[String], i: usize) -> f64 {
        if i == 0 || lowered[i - 1] != "least" || self.lexicon.contains(&lowered[i - 1]) {
            return valence;
        }
        if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
            return valence;
        }
        valence * N_SCALAR
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PolarityScorer for VaderAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = allcap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            if booster(word).is_some()
                || (word == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of"))
            {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&tokens, &lowered, i, cap_diff));
        }

        but_check(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }
}

/// Whitespace tokens longer than one character, with surrounding ASCII
/// punctuation stripped unless stripping would leave two characters or fewer
/// (keeps emoticons intact).
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .collect()
}

/// Upper-case in the `str.isupper` sense: has a cased letter and no lowercase.
fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are ALL CAPS.
fn allcap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn scalar_inc_dec(token: &str, lowered: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(lowered) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(token) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], start_i: usize, i: usize) -> f64 {
    let word = |back: usize| lowered[i - back].as_str();
    let so_or_this = |w: &str| matches!(w, "so" | "this");
    match start_i {
        0 => {
            if is_negation(word(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if word(2) == "never" && so_or_this(word(1)) {
                return valence * 1.25;
            }
            if word(2) == "without" && word(1) == "doubt" {
                return valence;
            }
            if is_negation(word(2)) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if word(3) == "never" && (so_or_this(word(2)) || so_or_this(word(1))) {
                return valence * 1.25;
            }
            if word(3) == "without" && (word(2) == "doubt" || word(1) == "doubt") {
                return valence;
            }
            if is_negation(word(3)) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Contrastive "but": halve what comes before, boost what comes after.
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => 0.96,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn score_valence(sentiments: &[f64], text: &str) -> f64 {
    if sentiments.is_empty() {
        return 0.0;
    }
    let mut sum: f64 = sentiments.iter().sum();
    let emphasis = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    round4(normalize(sum))
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        VaderAnalyzer::builtin().compound(text)
    }

    #[test]
    fn empty_and_whitespace_score_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
    }

    #[test]
    fn unknown_words_score_zero() {
        assert_eq!(score("the committee meets on tuesday"), 0.0);
    }

    #[test]
    fn single_word_matches_vader_normalization() {
        assert_eq!(score("good"), 0.4404);
        assert_eq!(score("bad"), -0.5423);
    }

    #[test]
    fn negation_flips_and_dampens() {
        assert_eq!(score("not good"), -0.3412);
        assert_eq!(score("isn't good"), -0.3412);
    }

    #[test]
    fn booster_intensifies() {
        assert_eq!(score("very good"), 0.4927);
        assert!(score("slightly good") < score("good"));
    }

    #[test]
    fn caps_emphasis_needs_mixed_case() {
        assert!(score("GOOD movie") > score("good movie"));
        assert_eq!(score("GOOD MOVIE"), score("good movie"));
    }

    #[test]
    fn single_character_tokens_are_ignored() {
        assert_eq!(score("a GREAT DAY"), score("great day"));
        assert_eq!(tokenize("I saw a GOOD film"), vec!["saw", "GOOD", "film"]);
    }

    #[test]
    fn full_lexicon_scores_common_words() {
        assert!(score("disappointed") <= -0.05);
        assert!(score("ugly") <= -0.05);
        assert!(score("stupid") <= -0.05);
        assert!(score("smile") >= 0.05);
        assert!(score("funny") >= 0.05);
        assert!(score("Fans disappointed by ugly, stupid result") <= -0.05);
    }

    #[test]
    fn matches_reference_vader_scores() {
        assert_eq!(score("VADER is smart, handsome, and funny."), 0.8316);
        assert_eq!(score("VADER is smart, handsome, and funny!"), 0.8439);
    }

    #[test]
    fn exclamation_marks_add_emphasis_up_to_four() {
        assert!(score("good!") > score("good"));
        assert!(score("good!!!!") > score("good!"));
        assert_eq!(score("good!!!!"), score("good!!!!!!!"));
    }

    #[test]
    fn repeated_question_marks_add_emphasis() {
        assert_eq!(score("good?"), score("good"));
        assert!(score("good??") > score("good"));
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        assert!(score("bad but good") > 0.0);
        assert!(score("good but bad") < 0.0);
    }

    #[test]
    fn no_before_sentiment_word_inverts_it() {
        assert!(score("no problem") > 0.0);
    }

    #[test]
    fn kind_of_is_not_scored_as_kind() {
        assert_eq!(score("kind of good"), score("good"));
    }

    #[test]
    fn least_negates_unless_at_least() {
        assert!(score("the least good") < 0.0);
        assert!(score("at least good") > 0.0);
    }

    #[test]
    fn punctuation_is_stripped_from_words() {
        assert_eq!(score("good."), score("good"));
        assert_eq!(score("\"good\","), score("good"));
    }

    #[test]
    fn emoticons_survive_tokenization() {
        assert!(score(":)") > 0.0);
        assert!(score(":(") < 0.0);
    }

    #[test]
    fn compound_stays_in_range() {
        let text = "great excellent best love wonderful amazing awesome fantastic perfect!!!!";
        let s = score(text);
        assert!(s > 0.9 && s <= 1.0, "got {s}");
        let text = "terrible worst disaster tragedy murder catastrophe war death!!!!";
        let s = score(text);
        assert!((-1.0..-0.9).contains(&s), "got {s}");
    }

    #[test]
    fn headline_with_optimism_is_positive() {
        assert!(score("Markets rally. Stocks surge on AI optimism") >= 0.05);
    }

    #[test]
    fn bare_separator_is_neutral() {
        assert_eq!(score(". "), 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let analyzer = VaderAnalyzer::builtin();
        let text = "Parliament fails to pass budget amid growing fears";
        let first = analyzer.compound(text);
        for _ in 0..10 {
            assert_eq!(analyzer.compound(text), first);
        }
    }

    #[test]
    fn custom_lexicon_replaces_builtin() {
        let lexicon = Lexicon::parse("rally\t2.0").expect("valid lexicon");
        let analyzer = VaderAnalyzer::new(lexicon);
        assert!(analyzer.compound("markets rally") > 0.0);
        assert_eq!(analyzer.compound("good"), 0.0);
    }
}
