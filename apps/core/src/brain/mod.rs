//! # Brain Module
//!
//! Deterministic, non-LLM responder for MoyoCare.
//! One pure pipeline per user turn: sentiment -> intent -> templated reply.
//!
//! ## Components
//! - `sentiment`: keyword-table sentiment levels (high distress checked first)
//! - `intent`: regex intent rules (CRISIS checked first)
//! - `cycle`: cycle phase and per-turn context
//! - `response`: branch policy and templates
//! - `turn`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod cycle;
pub mod intent;
pub mod response;
pub mod sentiment;
pub mod turn;

pub use analyzer::CompanionBrain;
pub use cycle::{ContextData, CyclePhase, CycleState};
pub use intent::{classify_intent, Intent, IntentClassifier, IntentResult};
pub use response::{generate_response, push_diagnostics, Response, ResponseContext, CRISIS_RESOURCES};
pub use sentiment::{analyze_sentiment, SentimentAnalyzer, SentimentLevel, SentimentResult};
pub use turn::TurnPacket;
