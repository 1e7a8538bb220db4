//! # Compound Classifier
//!
//! Rule-based valence scoring that reduces a record to a single compound
//! score in [-1, 1], then to a [`SentimentLabel`] by fixed threshold bands.

use super::scorer::{ensure_text, ScoringError, TextScorer};
use super::tokenizer::{has_mixed_case, punctuation_counts, Token, Tokenizer};
use super::valence::ValenceLexicon;
use crate::data::TextRecord;
use crate::defaults::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Valence multiplier for a negated word
const NEGATION_SCALAR: f64 = -0.74;

/// Valence added to an all-caps word in mixed-case text
const CAPS_INCREMENT: f64 = 0.733;

/// Booster damping by distance (1, 2, 3 tokens back)
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// Emphasis added per exclamation mark
const EXCLAMATION_INCREMENT: f64 = 0.292;

/// Exclamation marks counted at most
const MAX_EXCLAMATIONS: usize = 4;

/// Emphasis added per question mark when there are two or three
const QUESTION_INCREMENT: f64 = 0.18;

/// Emphasis for four or more question marks
const QUESTION_CAP: f64 = 0.96;

/// Normalization constant approximating the max expected raw sum
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Categorical sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in display order
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Map a compound score to its band.
    ///
    /// `>= 0.05` is Positive, `<= -0.05` is Negative, everything else
    /// (including NaN) is Neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valence scores for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundScores {
    /// Share of negative valence
    pub negative: f64,
    /// Share of neutral tokens
    pub neutral: f64,
    /// Share of positive valence
    pub positive: f64,
    /// Normalized sum, -1 to 1
    pub compound: f64,
    /// Band of `compound`
    pub label: SentimentLabel,
}

/// Rule-based compound sentiment classifier
pub struct CompoundClassifier {
    lexicon: Arc<ValenceLexicon>,
    tokenizer: Tokenizer,
}

impl CompoundClassifier {
    /// Create a classifier over an already loaded lexicon
    pub fn new(lexicon: Arc<ValenceLexicon>) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Score raw text
    pub fn analyze(&self, text: &str) -> CompoundScores {
        let tokens = self.tokenizer.tokenize(text);
        let shouting = has_mixed_case(text);

        let mut sentiments: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.token_valence(&tokens, i, token, shouting))
            .collect();

        apply_but_rule(&tokens, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let compound = normalize(sum);
        let (negative, neutral, positive) = proportions(&sentiments, emphasis);

        CompoundScores {
            negative,
            neutral,
            positive,
            compound,
            label: SentimentLabel::from_compound(compound),
        }
    }

    /// Valence of the token at `i` after boosters, negations and caps
    fn token_valence(&self, tokens: &[Token], i: usize, token: &Token, shouting: bool) -> f64 {
        if self.lexicon.booster(&token.normalized).is_some() {
            return 0.0;
        }

        let Some(mut valence) = self.lexicon.valence(&token.normalized) else {
            return 0.0;
        };

        if shouting && token.is_shouted() {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for (distance, damping) in BOOSTER_DAMPING.iter().enumerate().map(|(d, w)| (d + 1, w)) {
            if i < distance {
                break;
            }
            let previous = &tokens[i - distance];

            if let Some(mut scalar) = self.lexicon.booster(&previous.normalized) {
                if valence < 0.0 {
                    scalar = -scalar;
                }
                if shouting && previous.is_shouted() {
                    scalar += CAPS_INCREMENT.copysign(valence);
                }
                valence += scalar * damping;
            }

            if self.lexicon.is_negation(previous) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }
}

impl TextScorer for CompoundClassifier {
    type Output = CompoundScores;

    fn name(&self) -> &'static str {
        "compound"
    }

    fn score(&self, record: &TextRecord) -> Result<CompoundScores, ScoringError> {
        ensure_text(record, self.name())?;
        Ok(self.analyze(&record.text))
    }
}

/// Dampen sentiment before "but" and amplify it after
fn apply_but_rule(tokens: &[Token], sentiments: &mut [f64]) {
    let Some(but) = tokens.iter().position(|t| t.normalized == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but {
            *sentiment *= 0.5;
        } else if i > but {
            *sentiment *= 1.5;
        }
    }
}

/// Extra intensity from `!` and `?` marks
fn punctuation_emphasis(text: &str) -> f64 {
    let (exclamations, questions) = punctuation_counts(text);
    let bang = exclamations.min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCREMENT;
    let question = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CAP,
    };
    bang + question
}

/// Squash a raw valence sum into [-1, 1]
pub fn normalize(sum: f64) -> f64 {
    let score = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    score.clamp(-1.0, 1.0)
}

/// Negative, neutral and positive shares of the token sentiments
fn proportions(sentiments: &[f64], emphasis: f64) -> (f64, f64, f64) {
    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut neutral = 0.0;

    for &s in sentiments {
        if s > 0.0 {
            positive += s + 1.0;
        } else if s < 0.0 {
            negative += s - 1.0;
        } else {
            neutral += 1.0;
        }
    }

    if positive > negative.abs() {
        positive += emphasis;
    } else if positive < negative.abs() {
        negative -= emphasis;
    }

    let total = positive + negative.abs() + neutral;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (negative.abs() / total, neutral / total, positive / total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn classifier() -> CompoundClassifier {
        CompoundClassifier::new(Arc::new(ValenceLexicon::builtin()))
    }

    #[test]
    fn test_threshold_bands() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(-0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-1.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_record() {
        let scores = classifier().analyze("I love the new design of your website!");
        // (3.2 + 0.292) / sqrt(3.492^2 + 15)
        assert_abs_diff_eq!(scores.compound, 0.6696, epsilon = 1e-3);
        assert_eq!(scores.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_record_with_booster() {
        let scores = classifier().analyze("The flight was delayed and it was so frustrating.");
        assert!(scores.compound < -0.5);
        assert_eq!(scores.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_record() {
        let scores = classifier().analyze("The customer service was okay, nothing special.");
        assert!(scores.compound.abs() < 0.05);
        assert_eq!(scores.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_emoticon() {
        let scores = classifier().analyze("Looking forward to the weekend :)");
        assert_abs_diff_eq!(scores.compound, 2.0 / 19f64.sqrt(), epsilon = 1e-9);
        assert_eq!(scores.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negation_window() {
        let c = classifier();
        let plain = c.analyze("the movie was good").compound;
        let negated = c.analyze("the movie was not good").compound;
        let distant = c.analyze("not the movie was good").compound;
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        // negation four tokens back is outside the window
        assert_abs_diff_eq!(distant, plain, epsilon = 1e-12);
    }

    #[test]
    fn test_caps_emphasis() {
        let c = classifier();
        let plain = c.analyze("The food is good").compound;
        let shouted = c.analyze("The food is GOOD").compound;
        assert!(shouted > plain);
    }

    #[test]
    fn test_but_rule() {
        let c = classifier();
        let scores = c.analyze("The food was good but the service was terrible");
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_exclamation_capped() {
        let c = classifier();
        let four = c.analyze("good!!!!").compound;
        let six = c.analyze("good!!!!!!").compound;
        assert_abs_diff_eq!(four, six, epsilon = 1e-12);
    }

    #[test]
    fn test_question_mark_emphasis() {
        let c = classifier();
        let good = 1.9;

        assert_abs_diff_eq!(c.analyze("good?").compound, normalize(good), epsilon = 1e-12);
        assert_abs_diff_eq!(c.analyze("good??").compound, normalize(good + 2.0 * 0.18), epsilon = 1e-12);
        assert_abs_diff_eq!(c.analyze("good???").compound, normalize(good + 3.0 * 0.18), epsilon = 1e-12);
        assert_abs_diff_eq!(c.analyze("good????").compound, normalize(good + 0.96), epsilon = 1e-12);
        assert_abs_diff_eq!(c.analyze("good??????").compound, normalize(good + 0.96), epsilon = 1e-12);
        // emphasis follows the sign of the sum
        assert_abs_diff_eq!(c.analyze("bad??").compound, normalize(-2.5 - 0.36), epsilon = 1e-12);
    }

    #[test]
    fn test_booster_damping_by_distance() {
        let c = classifier();
        let good = 1.9;

        assert_abs_diff_eq!(c.analyze("very good").compound, normalize(good + 0.293), epsilon = 1e-12);
        assert_abs_diff_eq!(
            c.analyze("very the good").compound,
            normalize(good + 0.293 * 0.95),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            c.analyze("very the the good").compound,
            normalize(good + 0.293 * 0.9),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            c.analyze("very the the the good").compound,
            normalize(good),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dampening_booster_reduces_magnitude() {
        let c = classifier();

        let barely_good = c.analyze("barely good").compound;
        assert_abs_diff_eq!(barely_good, normalize(1.9 - 0.293), epsilon = 1e-12);
        assert!(barely_good < c.analyze("good").compound);

        let barely_bad = c.analyze("barely bad").compound;
        assert_abs_diff_eq!(barely_bad, normalize(-2.5 + 0.293), epsilon = 1e-12);
        assert!(barely_bad > c.analyze("bad").compound);
    }

    #[test]
    fn test_but_multipliers() {
        let scores = classifier().analyze("good but bad");
        assert_abs_diff_eq!(scores.compound, normalize(1.9 * 0.5 + -2.5 * 1.5), epsilon = 1e-12);

        let reversed = classifier().analyze("bad but good");
        assert_abs_diff_eq!(reversed.compound, normalize(-2.5 * 0.5 + 1.9 * 1.5), epsilon = 1e-12);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let scores = classifier().analyze("Great food but slow service");
        let total = scores.negative + scores.neutral + scores.positive;
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_sentiment_words() {
        let scores = classifier().analyze("The meeting is on Tuesday");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neutral, 1.0);
        assert_eq!(scores.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0), 0.0);
        assert!(normalize(1e6) <= 1.0);
        assert!(normalize(-1e6) >= -1.0);
    }

    #[test]
    fn test_empty_record_is_error() {
        let err = classifier().score(&TextRecord::new(1, "")).unwrap_err();
        assert!(matches!(err, ScoringError::EmptyText { position: 1, .. }));
    }
}
