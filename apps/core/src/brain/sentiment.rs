//! Sentiment classification using keyword tables.
//!
//! Maps a free-text utterance to a coarse emotional/urgency level. Tables are
//! checked in a fixed order (high distress first), so risk language always wins
//! over co-occurring positive words.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Coarse sentiment/urgency level of one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentimentLevel {
    /// Upbeat, grateful, excited
    Positive,
    /// No marker matched
    Neutral,
    /// Sad, lonely, stressed: the user is asking to be heard
    Empathy,
    /// Self-harm or suicidal language
    HighDistress,
}

impl SentimentLevel {
    /// All levels, in classification priority order followed by the fallback
    pub const ALL: [SentimentLevel; 4] = [
        SentimentLevel::HighDistress,
        SentimentLevel::Empathy,
        SentimentLevel::Positive,
        SentimentLevel::Neutral,
    ];

    /// Lower-case label, as serialized
    pub fn label(&self) -> &'static str {
        match self {
            SentimentLevel::Positive => "positive",
            SentimentLevel::Neutral => "neutral",
            SentimentLevel::Empathy => "empathy",
            SentimentLevel::HighDistress => "high-distress",
        }
    }
}

impl fmt::Display for SentimentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_uppercase())
    }
}

/// Result of sentiment analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Winning level
    pub level: SentimentLevel,
    /// Intensity score (0.0 - 1.0)
    pub score: f32,
    /// Keywords from the winning table that were found
    pub matched_keywords: Vec<String>,
}

impl SentimentResult {
    /// The fallback result for text with no markers
    pub fn neutral() -> Self {
        Self {
            level: SentimentLevel::Neutral,
            score: 0.0,
            matched_keywords: vec![],
        }
    }
}

const HIGH_DISTRESS_KEYWORDS: &[&str] = &[
    "kill myself",
    "killing myself",
    "suicide",
    "suicidal",
    "end my life",
    "end it all",
    "want to die",
    "wanna die",
    "self harm",
    "self-harm",
    "hurt myself",
    "hurting myself",
    "cut myself",
    "no reason to live",
    "better off dead",
    "can't go on",
    "cant go on",
    "feel like dying",
    "feeling like dying",
    "kms",
    "going to end it",
    "gonna end it",
];

const EMPATHY_KEYWORDS: &[&str] = &[
    "sad",
    "lonely",
    "alone",
    "depressed",
    "anxious",
    "anxiety",
    "stressed",
    "stress",
    "overwhelmed",
    "worried",
    "scared",
    "afraid",
    "upset",
    "cry",
    "crying",
    "hurt",
    "hopeless",
    "worthless",
    "heartbroken",
    "struggling",
    "frustrated",
    "miss",
    "tired",
];

const POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "good",
    "happy",
    "amazing",
    "awesome",
    "excited",
    "wonderful",
    "glad",
    "love",
    "grateful",
    "thankful",
    "fantastic",
    "better",
    "blessed",
    "proud",
    "thanks",
    "thank you",
];

/// Build a case-insensitive, word-bounded alternation from a keyword table
fn keyword_regex(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    // NOTE: expect() is acceptable here: the tables are static and a bad one is a build-time bug
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("Invalid sentiment keyword table")
}

// Priority order: the first table with a hit decides the level.
static SENTIMENT_TABLES: LazyLock<Vec<(SentimentLevel, Regex)>> = LazyLock::new(|| {
    vec![
        (SentimentLevel::HighDistress, keyword_regex(HIGH_DISTRESS_KEYWORDS)),
        (SentimentLevel::Empathy, keyword_regex(EMPATHY_KEYWORDS)),
        (SentimentLevel::Positive, keyword_regex(POSITIVE_KEYWORDS)),
    ]
});

/// Replace typographic apostrophes so "can’t" matches "can't"
pub(crate) fn normalize_apostrophes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
}

/// Keyword-table sentiment analyzer
pub struct SentimentAnalyzer {
    tables: &'static [(SentimentLevel, Regex)],
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            tables: SENTIMENT_TABLES.as_slice(),
        }
    }

    /// Analyze the sentiment of a text. Never fails; empty text is neutral.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let text = normalize_apostrophes(text.trim());
        if text.is_empty() {
            return SentimentResult::neutral();
        }

        for (level, regex) in self.tables {
            let mut matched: Vec<String> = Vec::new();
            for m in regex.find_iter(&text) {
                let keyword = m.as_str().to_lowercase();
                if !matched.contains(&keyword) {
                    matched.push(keyword);
                }
            }

            if !matched.is_empty() {
                let score = match level {
                    SentimentLevel::HighDistress => 1.0,
                    _ => (0.4 + 0.2 * matched.len() as f32).min(1.0),
                };
                return SentimentResult {
                    level: *level,
                    score,
                    matched_keywords: matched,
                };
            }
        }

        SentimentResult::neutral()
    }
}

/// Convenience wrapper around [`SentimentAnalyzer::analyze`]
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    SentimentAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_distress_detection() {
        let result = analyze_sentiment("I want to kill myself");
        assert_eq!(result.level, SentimentLevel::HighDistress);
        assert_eq!(result.score, 1.0);
        assert!(result.matched_keywords.contains(&"kill myself".to_string()));
    }

    #[test]
    fn test_indirect_distress_phrasing() {
        for text in ["I feel like dying", "i wanna kms", "I'm going to end it"] {
            assert_eq!(analyze_sentiment(text).level, SentimentLevel::HighDistress, "'{}'", text);
        }
    }

    #[test]
    fn test_distress_beats_positive_words() {
        let result = analyze_sentiment("Great day but honestly I'm better off dead");
        assert_eq!(result.level, SentimentLevel::HighDistress);
    }

    #[test]
    fn test_typographic_apostrophe() {
        let result = analyze_sentiment("I can’t go on like this");
        assert_eq!(result.level, SentimentLevel::HighDistress);
    }

    #[test]
    fn test_empathy_detection() {
        assert_eq!(analyze_sentiment("I feel lonely").level, SentimentLevel::Empathy);
        assert_eq!(analyze_sentiment("I am stressed").level, SentimentLevel::Empathy);
    }

    #[test]
    fn test_positive_detection() {
        let result = analyze_sentiment("Hello, I'm doing great today!");
        assert_eq!(result.level, SentimentLevel::Positive);
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_figurative_killing_is_not_distress() {
        let result = analyze_sentiment("Cramps are killing me");
        assert_ne!(result.level, SentimentLevel::HighDistress);
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(analyze_sentiment("").level, SentimentLevel::Neutral);
        assert_eq!(analyze_sentiment("   ").level, SentimentLevel::Neutral);
        assert_eq!(analyze_sentiment("The bus leaves at noon").level, SentimentLevel::Neutral);
    }

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(SentimentLevel::HighDistress.to_string(), "HIGH-DISTRESS");
        assert_eq!(SentimentLevel::Empathy.to_string(), "EMPATHY");
    }
}
