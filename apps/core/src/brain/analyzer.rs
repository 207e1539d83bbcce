//! Companion Brain - orchestrator for the rule-based pipeline.
//!
//! Runs sentiment analysis and intent classification on the raw text, then hands
//! both to the response generator together with the caller's cycle context.

use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

use super::cycle::ContextData;
use super::intent::{IntentClassifier, IntentResult};
use super::response::{generate_response, ResponseContext};
use super::sentiment::{SentimentAnalyzer, SentimentResult};
use super::turn::TurnPacket;

/// Main analyzer that owns both classifiers
pub struct CompanionBrain {
    sentiment_analyzer: SentimentAnalyzer,
    intent_classifier: IntentClassifier,
}

impl Default for CompanionBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanionBrain {
    pub fn new() -> Self {
        Self {
            sentiment_analyzer: SentimentAnalyzer::new(),
            intent_classifier: IntentClassifier::new(),
        }
    }

    /// Run both classifiers. They are independent of each other.
    pub fn analyze(&self, text: &str) -> (SentimentResult, IntentResult) {
        (
            self.sentiment_analyzer.analyze(text),
            self.intent_classifier.classify(text),
        )
    }

    /// Run the whole pipeline for one turn
    pub fn respond(&self, text: &str, context: &ContextData) -> TurnPacket {
        let start = Instant::now();

        let (sentiment, intent) = self.analyze(text);
        let response = generate_response(ResponseContext::new(
            sentiment.clone(),
            intent.primary,
            *context,
        ));

        let packet = TurnPacket {
            input: text.to_string(),
            sentiment,
            intent,
            context: *context,
            response,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        if packet.is_crisis() {
            warn!(matched = ?packet.intent.matched_patterns, "Crisis protocol activated");
        }
        info!("Turn analyzed: {}", packet.summary());

        packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{CyclePhase, Intent, SentimentLevel};

    #[test]
    fn test_basic_turn() {
        let brain = CompanionBrain::new();
        let context = ContextData::new(false, CyclePhase::Follicular);

        let packet = brain.respond("Hello, I'm doing great today!", &context);

        assert_eq!(packet.input, "Hello, I'm doing great today!");
        assert_eq!(packet.sentiment.level, SentimentLevel::Positive);
        assert_eq!(packet.intent.primary, Intent::General);
        assert!(!packet.is_crisis());
        assert!(packet.processing_time_ms < 1000);
    }

    #[test]
    fn test_crisis_turn() {
        let brain = CompanionBrain::new();
        let context = ContextData::new(true, CyclePhase::Luteal);

        let packet = brain.respond("I want to kill myself", &context);
        assert!(packet.is_crisis());
        assert!(packet.response.response.contains("988"));
        assert!(packet.summary().contains("Crisis: yes"));
    }
}
