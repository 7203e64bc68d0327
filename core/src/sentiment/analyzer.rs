//! Polarity scorer
//!
//! Scores a review text in [-1, 1] from the lexicon, with intensity
//! modifiers and a short negation window.

use crate::model::Sentiment;
use crate::sentiment::lexicon::ReviewLexicon;

/// Lexicon-based sentiment analyzer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: ReviewLexicon,
    /// Words after a negation that still get inverted
    negation_window: usize,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: ReviewLexicon::new(),
            negation_window: 3,
        }
    }

    pub fn with_lexicon(mut self, lexicon: ReviewLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Polarity score of a text in [-1, 1]. Empty or lexicon-free text
    /// scores 0.0.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);

        let mut total_score = 0.0;
        let mut word_count = 0usize;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0usize;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(factor) = self.lexicon.get_modifier(token) {
                current_modifier = factor;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(token) {
                let mut score = base_score * current_modifier;

                // Invert with slight damping inside the negation window
                if negation_active && words_since_negation < self.negation_window {
                    score = -score * 0.8;
                }

                total_score += score;
                word_count += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if word_count > 0 {
            (total_score / word_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Score a text and map it to a label. Total: every text, including
    /// the empty one, yields a label.
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased alphabetic-trimmed whitespace tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_punctuation_and_lowercases() {
        let tokens = tokenize("Great stroller, really!");
        assert_eq!(tokens, vec!["great", "stroller", "really"]);
    }

    #[test]
    fn tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.polarity("this walker is good") > 0.0);
        assert!(analyzer.polarity("this walker is not good") < 0.0);
    }

    #[test]
    fn modifier_amplifies_score() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.polarity("good stroller");
        let amplified = analyzer.polarity("very good stroller");
        assert!(amplified > plain);
    }
}
