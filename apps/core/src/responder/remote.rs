use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{error, info, warn};

use super::Responder;
use crate::brain::{
    push_diagnostics, CompanionBrain, ContextData, CyclePhase, Intent, Response, SentimentLevel,
    TurnPacket,
};
use crate::config::CompanionConfig;
use crate::error::AppError;
use crate::models::{ChatMessage, PreferredLanguage, Role};

// --- Wire types (OpenAI-compatible chat completions) ---
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, PartialEq)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Most recent transcript messages sent with each request (ten exchanges)
const MAX_HISTORY_MESSAGES: usize = 20;

/// Responder backed by a hosted chat-completion API.
///
/// Exactly one request per turn, no retries. Crisis turns are answered locally
/// and never leave the process.
pub struct RemoteResponder {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    request_timeout: Duration,
    language: PreferredLanguage,
    brain: CompanionBrain,
}

impl RemoteResponder {
    pub fn new(config: &CompanionConfig) -> Result<Self, AppError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AppError::Config("MOYO_API_KEY is required for the remote responder".to_string()))?;

        Ok(Self {
            client: Client::new(),
            endpoint: config.completions_url(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            request_timeout: config.timeout(),
            language: config.language,
            brain: CompanionBrain::new(),
        })
    }

    /// Persona, reply language and cycle context for the model
    fn system_prompt(&self, context: &ContextData) -> String {
        let mut prompt = format!(
            "You are Moyo, a warm and caring wellness companion for young women. \
             Speak like a supportive older sister and keep replies short, practical and kind. \
             Always reply in {}. \
             Never diagnose; suggest a healthcare provider when symptoms are severe or persistent. \
             If the user mentions self-harm or suicide, share these resources: \
             988 Suicide & Crisis Lifeline, Crisis Text Line (text HOME to 741741), findahelpline.com.",
            self.language
        );

        prompt.push_str(&format!(
            "\n\nCycle context: period mode is {}; the user is in the {}.",
            if context.is_period_mode { "on" } else { "off" },
            context.cycle_phase.description()
        ));
        if context.cycle_phase == CyclePhase::Luteal {
            prompt.push_str(
                " Hormonal changes in this phase can intensify emotions and make concentration harder.",
            );
        }
        prompt
    }

    fn build_messages<'a>(
        &self,
        system_prompt: &'a str,
        input: &'a str,
        history: &'a [ChatMessage],
    ) -> Vec<WireMessage<'a>> {
        let mut messages = Vec::with_capacity(history.len().min(MAX_HISTORY_MESSAGES) + 2);
        messages.push(WireMessage {
            role: Role::System.as_str(),
            content: system_prompt,
        });
        let turns: Vec<&ChatMessage> = history.iter().filter(|m| m.role != Role::System).collect();
        let skip = turns.len().saturating_sub(MAX_HISTORY_MESSAGES);
        messages.extend(turns.into_iter().skip(skip).map(|m| WireMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));
        messages.push(WireMessage {
            role: Role::User.as_str(),
            content: input,
        });
        messages
    }

    /// Send the request and read the body
    async fn exchange(&self, payload: &CompletionRequest<'_>) -> Result<CompletionResponse, AppError> {
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!(%status, "Completion request failed");
            return Err(AppError::Http(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        Ok(res.json().await?)
    }

    async fn complete(&self, messages: Vec<WireMessage<'_>>) -> Result<String, AppError> {
        let payload = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        // Bound the whole exchange: a server can stall after the headers
        let parsed = timeout(self.request_timeout, self.exchange(&payload)).await??;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Http("Completion response contained no message".to_string()))
    }
}

#[async_trait]
impl Responder for RemoteResponder {
    async fn respond(
        &self,
        input: &str,
        history: &[ChatMessage],
        context: &ContextData,
    ) -> Result<TurnPacket, AppError> {
        let start = Instant::now();
        let (sentiment, intent) = self.brain.analyze(input);

        let crisis =
            intent.primary == Intent::Crisis || sentiment.level == SentimentLevel::HighDistress;
        if crisis {
            warn!("Crisis detected locally; answering without the remote model");
            return Ok(self.brain.respond(input, context));
        }

        let mut thinking = Vec::new();
        push_diagnostics(&mut thinking, sentiment.level, intent.primary, context);
        thinking.push(format!("Asking {} for a reply...", self.model));

        let system_prompt = self.system_prompt(context);
        let messages = self.build_messages(&system_prompt, input, history);
        info!(model = %self.model, turns = messages.len(), "Sending chat completion request");

        let reply = self.complete(messages).await?;

        Ok(TurnPacket {
            input: input.to_string(),
            sentiment,
            intent,
            context: *context,
            response: Response {
                response: reply,
                thinking,
                resources: None,
            },
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        })
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
