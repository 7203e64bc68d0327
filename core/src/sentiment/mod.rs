// Sentiment scoring
//
// Lexicon-based polarity scorer plus the fixed threshold mapping to the
// three dashboard labels.

mod analyzer;
mod lexicon;

pub use analyzer::SentimentAnalyzer;
pub use lexicon::ReviewLexicon;
