//! MoyoCare core: a rule-based wellness companion.
//!
//! Each user turn runs sentiment analysis, intent classification and a
//! templated reply shaped by the user's cycle phase. A remote chat-completion
//! backend can stand in for the templates, but crisis turns are always
//! answered locally.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod responder;
pub mod session;
pub mod telemetry;
pub mod wellness;

#[cfg(test)]
mod tests;
