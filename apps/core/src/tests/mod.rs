//! Test Module
//!
//! Cross-module suites for the MoyoCare core.
//!
//! ## Test Categories
//! - `brain_tests`: the full sentiment, intent and response pipeline
//! - `session_tests`: chat sessions over the rule-based and remote responders
//! - `wellness_tests`: breathing pacing, journal views and dashboard helpers

pub mod brain_tests;
pub mod wellness_tests;
