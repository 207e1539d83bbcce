//! Turn Packet - output structure for one companion turn.
//!
//! Carries the classifications alongside the generated reply so callers can
//! render badges and the thinking trace without re-running the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cycle::ContextData;
use super::intent::{Intent, IntentResult};
use super::response::Response;
use super::sentiment::{SentimentLevel, SentimentResult};

/// Complete result of one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnPacket {
    /// Original user utterance
    pub input: String,

    /// Sentiment classification
    pub sentiment: SentimentResult,

    /// Intent classification, with secondary signals
    pub intent: IntentResult,

    /// Cycle context the reply was generated for
    pub context: ContextData,

    /// The reply, its trace and any resources
    pub response: Response,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of the turn
    pub timestamp: DateTime<Utc>,
}

impl TurnPacket {
    /// Whether the crisis protocol fired for this turn
    pub fn is_crisis(&self) -> bool {
        self.intent.primary == Intent::Crisis || self.sentiment.level == SentimentLevel::HighDistress
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Sentiment: {} ({:.2}), Intent: {} ({:.0}%), Phase: {}, Period mode: {}, Crisis: {}",
            self.sentiment.level,
            self.sentiment.score,
            self.intent.primary,
            self.intent.confidence * 100.0,
            self.context.cycle_phase,
            if self.context.is_period_mode { "on" } else { "off" },
            if self.is_crisis() { "yes" } else { "no" }
        )
    }
}
