//! Chat session: the transcript and cycle state behind one conversation.
//!
//! `send` takes `&mut self`, so a session can never start a second turn while
//! the previous one is still being answered.

use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::brain::{ContextData, CyclePhase, CycleState, TurnPacket};
use crate::error::AppError;
use crate::models::ChatMessage;
use crate::responder::Responder;

/// Canned openers offered while the conversation is empty
pub const QUICK_PROMPTS: [&str; 4] = [
    "I am stressed",
    "Cramps are killing me",
    "I feel lonely",
    "Exam tomorrow",
];

pub struct ChatSession {
    id: Uuid,
    messages: Vec<ChatMessage>,
    cycle: CycleState,
    responder: Arc<dyn Responder>,
    last_turn: Option<TurnPacket>,
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self::with_cycle(responder, CycleState::default())
    }

    pub fn with_cycle(responder: Arc<dyn Responder>, cycle: CycleState) -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            cycle,
            responder,
            last_turn: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn responder_name(&self) -> &'static str {
        self.responder.name()
    }

    /// Full packet of the most recent successful turn, including crisis resources
    pub fn last_turn(&self) -> Option<&TurnPacket> {
        self.last_turn.as_ref()
    }

    pub fn cycle(&self) -> &CycleState {
        &self.cycle
    }

    pub fn set_period_mode(&mut self, enabled: bool) {
        self.cycle.set_period_mode(enabled);
        info!(session_id = %self.id, period_mode = enabled, phase = %self.cycle.cycle_phase(), "Period mode toggled");
    }

    pub fn set_cycle_phase(&mut self, phase: CyclePhase) {
        self.cycle.set_cycle_phase(phase);
    }

    pub fn context(&self) -> ContextData {
        self.cycle.context()
    }

    /// Quick prompts, only before the first message
    pub fn suggested_prompts(&self) -> &'static [&'static str] {
        if self.messages.is_empty() {
            &QUICK_PROMPTS
        } else {
            &[]
        }
    }

    /// Run one turn. Blank input is ignored and yields `Ok(None)`.
    ///
    /// On error the user message stays in the transcript so the caller can
    /// show it next to the failure.
    pub async fn send(&mut self, text: &str) -> Result<Option<ChatMessage>, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let history_len = self.messages.len();
        self.messages.push(ChatMessage::user(text));
        let context = self.context();

        info!(session_id = %self.id, responder = self.responder.name(), "Processing user message");
        let packet = self
            .responder
            .respond(text, &self.messages[..history_len], &context)
            .await
            .inspect_err(|e| error!(session_id = %self.id, "Responder failed: {}", e))?;

        let mut reply = ChatMessage::assistant(packet.response.response.clone());
        reply.thinking = packet.response.thinking.clone();
        reply.sentiment = Some(packet.sentiment.level.label().to_string());
        reply.intent = Some(packet.intent.primary.label().to_string());

        self.messages.push(reply.clone());
        self.last_turn = Some(packet);
        Ok(Some(reply))
    }
}
