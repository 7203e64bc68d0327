//! Product-review sentiment lexicon
//!
//! Word scores in [-1, 1], intensity modifiers, and negation words tuned
//! for consumer product reviews.

use std::collections::HashMap;

/// Lexicon backing the polarity scorer.
#[derive(Debug, Clone)]
pub struct ReviewLexicon {
    /// Positive words with scores
    positive: HashMap<String, f64>,
    /// Negative words with scores
    negative: HashMap<String, f64>,
    /// Intensity modifiers (amplifiers/dampeners)
    modifiers: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
}

impl ReviewLexicon {
    pub fn new() -> Self {
        let mut positive = HashMap::new();
        let mut negative = HashMap::new();
        let mut modifiers = HashMap::new();

        // Strongly positive (0.7 - 1.0)
        let strong_positive = [
            ("excellent", 0.9),
            ("amazing", 0.85),
            ("fantastic", 0.85),
            ("wonderful", 0.85),
            ("perfect", 0.9),
            ("love", 0.8),
            ("loves", 0.8),
            ("loved", 0.8),
            ("best", 0.8),
            ("awesome", 0.8),
            ("outstanding", 0.85),
            ("delighted", 0.8),
            ("impressed", 0.75),
            ("great", 0.7),
            ("happy", 0.7),
            ("recommend", 0.7),
            ("recommended", 0.7),
        ];

        // Mildly positive (0.3 - 0.6)
        let mild_positive = [
            ("good", 0.5),
            ("nice", 0.45),
            ("sturdy", 0.55),
            ("solid", 0.5),
            ("durable", 0.55),
            ("comfortable", 0.5),
            ("easy", 0.45),
            ("smooth", 0.45),
            ("safe", 0.5),
            ("worth", 0.5),
            ("value", 0.4),
            ("reliable", 0.55),
            ("fine", 0.3),
            ("decent", 0.35),
            ("works", 0.35),
            ("useful", 0.45),
            ("quality", 0.4),
        ];

        // Strongly negative (-0.7 - -1.0)
        let strong_negative = [
            ("terrible", -0.9),
            ("horrible", -0.9),
            ("awful", -0.85),
            ("worst", -0.9),
            ("hate", -0.8),
            ("hated", -0.8),
            ("useless", -0.8),
            ("dangerous", -0.85),
            ("broken", -0.75),
            ("broke", -0.75),
            ("unusable", -0.8),
            ("defective", -0.8),
            ("waste", -0.75),
            ("garbage", -0.85),
            ("unsafe", -0.8),
        ];

        // Mildly negative (-0.3 - -0.6)
        let mild_negative = [
            ("bad", -0.55),
            ("poor", -0.55),
            ("flimsy", -0.55),
            ("cheap", -0.45),
            ("wobbly", -0.5),
            ("disappointing", -0.6),
            ("disappointed", -0.6),
            ("uncomfortable", -0.5),
            ("difficult", -0.45),
            ("hard", -0.35),
            ("noisy", -0.4),
            ("scratched", -0.45),
            ("cracked", -0.55),
            ("refund", -0.5),
            ("return", -0.4),
            ("returned", -0.45),
            ("overpriced", -0.55),
            ("slow", -0.35),
            ("stuck", -0.45),
            ("missing", -0.5),
        ];

        for (word, score) in strong_positive.iter().chain(mild_positive.iter()) {
            positive.insert((*word).to_string(), *score);
        }
        for (word, score) in strong_negative.iter().chain(mild_negative.iter()) {
            negative.insert((*word).to_string(), *score);
        }

        // Amplifiers > 1.0, dampeners < 1.0
        for (word, factor) in [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 1.8),
            ("absolutely", 1.7),
            ("totally", 1.5),
            ("so", 1.3),
            ("quite", 1.2),
            ("slightly", 0.5),
            ("somewhat", 0.6),
            ("barely", 0.4),
            ("bit", 0.6),
        ] {
            modifiers.insert(word.to_string(), factor);
        }

        let negations = [
            "not", "no", "never", "nothing", "don't", "doesn't", "didn't", "won't", "can't",
            "cannot", "isn't", "wasn't", "aren't", "hardly",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            positive,
            negative,
            modifiers,
            negations,
        }
    }

    /// Score of a sentiment word, if the word is in the lexicon.
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.positive
            .get(word)
            .or_else(|| self.negative.get(word))
            .copied()
    }

    /// Intensity factor of a modifier word, if any.
    pub fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}
