use async_trait::async_trait;

use super::Responder;
use crate::brain::{CompanionBrain, ContextData, TurnPacket};
use crate::error::AppError;
use crate::models::ChatMessage;

/// Offline responder backed by the deterministic brain. History is ignored.
#[derive(Default)]
pub struct RuleBasedResponder {
    brain: CompanionBrain,
}

impl RuleBasedResponder {
    pub fn new() -> Self {
        Self {
            brain: CompanionBrain::new(),
        }
    }
}

#[async_trait]
impl Responder for RuleBasedResponder {
    async fn respond(
        &self,
        input: &str,
        _history: &[ChatMessage],
        context: &ContextData,
    ) -> Result<TurnPacket, AppError> {
        Ok(self.brain.respond(input, context))
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}
