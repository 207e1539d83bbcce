//! Responder seam.
//!
//! The chat session talks to a [`Responder`] and does not care whether replies
//! come from the local rule-based brain or a remote chat-completion service.

pub mod remote;
pub mod rule_based;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::brain::{ContextData, TurnPacket};
use crate::config::CompanionConfig;
use crate::error::AppError;
use crate::models::ChatMessage;

pub use remote::RemoteResponder;
pub use rule_based::RuleBasedResponder;

/// Produces one reply per user turn.
///
/// Implementations may be called concurrently for different sessions, but a
/// single session only ever has one call in flight.
#[async_trait]
pub trait Responder: Send + Sync + 'static {
    /// Reply to `input`, given the earlier turns of the conversation.
    async fn respond(
        &self,
        input: &str,
        history: &[ChatMessage],
        context: &ContextData,
    ) -> Result<TurnPacket, AppError>;

    /// Short name for logs and the UI.
    fn name(&self) -> &'static str;
}

/// Remote when an API key is configured, otherwise the offline brain.
pub fn select_responder(config: &CompanionConfig) -> Result<Arc<dyn Responder>, AppError> {
    let responder: Arc<dyn Responder> = if config.has_remote() {
        Arc::new(RemoteResponder::new(config)?)
    } else {
        Arc::new(RuleBasedResponder::new())
    };
    info!(responder = responder.name(), "Responder selected");
    Ok(responder)
}
