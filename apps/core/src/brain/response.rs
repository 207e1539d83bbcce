//! Response Generator.
//!
//! Combines sentiment, intent and cycle context into one templated reply plus a
//! thinking trace. The dispatcher is a single ordered match; each branch renders
//! through its own small function.

use serde::{Deserialize, Serialize};

use super::cycle::{ContextData, CyclePhase};
use super::intent::Intent;
use super::sentiment::{SentimentLevel, SentimentResult};

/// Literal crisis resources attached to every crisis response
pub const CRISIS_RESOURCES: [&str; 3] = [
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: 741741",
    "findahelpline.com",
];

/// Aggregate input to the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseContext {
    pub sentiment: SentimentResult,
    pub intent: Intent,
    pub context: ContextData,
    /// Trace lines so far; the generator appends and hands it back
    pub thinking: Vec<String>,
}

impl ResponseContext {
    pub fn new(sentiment: SentimentResult, intent: Intent, context: ContextData) -> Self {
        Self {
            sentiment,
            intent,
            context,
            thinking: Vec::new(),
        }
    }
}

/// Generated reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub response: String,
    pub thinking: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

/// Join non-empty paragraphs with a blank line between them
fn paragraphs(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The four fixed trace lines. They carry no decision weight.
pub fn push_diagnostics(
    thinking: &mut Vec<String>,
    level: SentimentLevel,
    intent: Intent,
    context: &ContextData,
) {
    thinking.push(format!("Analyzing sentiment: {}", level));
    thinking.push(format!("Intent classified as: {}", intent));
    thinking.push(format!("Context: {}", context.cycle_phase.description()));
    thinking.push(format!(
        "Period Mode: {}",
        if context.is_period_mode { "Active" } else { "Inactive" }
    ));
}

/// Produce the reply for one turn. Total over every input combination.
pub fn generate_response(ctx: ResponseContext) -> Response {
    let ResponseContext {
        sentiment,
        intent,
        context,
        mut thinking,
    } = ctx;

    push_diagnostics(&mut thinking, sentiment.level, intent, &context);

    let level = sentiment.level;
    let (response, resources) = match intent {
        Intent::Crisis => {
            thinking.push("⚠️ CRISIS PROTOCOL ACTIVATED".to_string());
            render_crisis_response()
        }
        _ if level == SentimentLevel::HighDistress => {
            thinking.push("⚠️ CRISIS PROTOCOL ACTIVATED".to_string());
            render_crisis_response()
        }
        Intent::Physical => {
            thinking.push("Generating context-aware physical wellness advice...".to_string());
            (render_physical_response(&context), None)
        }
        Intent::Academic => {
            thinking.push("Providing academic support with cycle awareness...".to_string());
            (render_academic_response(&context), None)
        }
        _ if intent == Intent::Emotional || level == SentimentLevel::Empathy => {
            thinking.push("Activating empathy mode...".to_string());
            (render_emotional_response(&context), None)
        }
        _ => {
            thinking.push("Generating supportive response...".to_string());
            (render_general_response(level), None)
        }
    };

    Response {
        response,
        thinking,
        resources,
    }
}

/// Fixed safety message plus the literal resource list
pub fn render_crisis_response() -> (String, Option<Vec<String>>) {
    let response = "I'm really concerned about you. Please reach out for immediate help:\n\n\
        🆘 **Crisis Resources:**\n\
        • National Suicide Prevention Lifeline: 988\n\
        • Crisis Text Line: Text HOME to 741741\n\
        • International: findahelpline.com\n\n\
        You matter, and there are people who want to help. Please don't face this alone. 💜"
        .to_string();
    let resources = CRISIS_RESOURCES.iter().map(|r| r.to_string()).collect();
    (response, Some(resources))
}

pub fn render_physical_response(context: &ContextData) -> String {
    if !context.is_period_mode {
        return paragraphs(&[
            "I understand you're not feeling well. Let me help with some general wellness tips:",
            "💧 **Self-Care Basics:**\n• Drink plenty of water\n• Ensure you're getting 7-9 hours of sleep\n• Take breaks throughout the day",
            "🌿 **Natural Relief:**\n• Deep breathing exercises\n• Gentle stretching\n• Fresh air and light movement",
            "If symptoms persist, please consider consulting a healthcare provider. Take care! 🌸",
        ]);
    }

    let opening = format!(
        "I hear you - period symptoms can be really tough. Since you're in your {}, here are some targeted suggestions:",
        context.cycle_phase.description()
    );
    let closing = if context.cycle_phase == CyclePhase::Menstrual {
        "This is the hardest phase - be extra gentle with yourself. 💛"
    } else {
        "Your body is working hard - prioritize rest and comfort. ✨"
    };

    paragraphs(&[
        opening.as_str(),
        "🌡️ **For Cramps & Pain:**\n• Apply a heating pad to your lower abdomen\n• Try gentle yoga or stretching\n• Stay hydrated with warm herbal tea",
        "💊 **Consider:**\n• Ibuprofen (if safe for you)\n• Magnesium supplements\n• Rest when your body needs it",
        closing,
    ])
}

pub fn render_academic_response(context: &ContextData) -> String {
    let opening = format!(
        "Academic stress is real, and {}.",
        if context.is_period_mode {
            "dealing with it during your period makes it even harder"
        } else {
            "you deserve support through this"
        }
    );
    let luteal_note = if context.cycle_phase == CyclePhase::Luteal {
        "⚠️ Note: You're in the Luteal Phase - many people find concentration harder now. Be extra kind to yourself!"
    } else {
        ""
    };

    paragraphs(&[
        opening.as_str(),
        "📚 **Stress Management:**\n• Break tasks into smaller chunks\n• Use the Pomodoro technique (25 min focus, 5 min break)\n• Practice self-compassion",
        luteal_note,
        "🧠 **Study Tips:**\n• Study in short, focused bursts\n• Prioritize the most important topics\n• Remember: One exam doesn't define you",
        "You've got this! 💪",
    ])
}

pub fn render_emotional_response(context: &ContextData) -> String {
    let opening = format!(
        "I'm here for you. {}",
        if context.is_period_mode {
            "Emotional ups and downs during your cycle are completely valid."
        } else {
            "Your feelings are valid."
        }
    );
    let hormonal_note = if context.cycle_phase == CyclePhase::Luteal {
        "🌙 You're in the Luteal Phase - hormonal changes can intensify emotions. This is biological, not weakness."
    } else {
        ""
    };

    paragraphs(&[
        opening.as_str(),
        "💜 **What might help:**\n• Talk to someone you trust\n• Journal your thoughts\n• Do something that brings you joy\n• Remember: feelings are temporary",
        hormonal_note,
        "Be gentle with yourself today. 🌸",
    ])
}

pub fn render_general_response(level: SentimentLevel) -> String {
    let opening = if level == SentimentLevel::Positive {
        "I'm so glad to hear you're doing well! 😊"
    } else {
        "I'm here to support you."
    };

    paragraphs(&[
        opening,
        "How can I help you today? I can provide:\n• Period symptom management\n• Academic stress support\n• Emotional wellness tips\n• Cycle-aware self-care advice",
        "Feel free to share what's on your mind. 💛",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(level: SentimentLevel) -> SentimentResult {
        SentimentResult {
            level,
            score: 0.5,
            matched_keywords: vec![],
        }
    }

    fn ctx(level: SentimentLevel, intent: Intent, period: bool, phase: CyclePhase) -> ResponseContext {
        ResponseContext::new(sentiment(level), intent, ContextData::new(period, phase))
    }

    #[test]
    fn test_fixed_trace_lines() {
        let out = generate_response(ctx(
            SentimentLevel::Empathy,
            Intent::Academic,
            true,
            CyclePhase::Ovulation,
        ));
        assert_eq!(out.thinking[0], "Analyzing sentiment: EMPATHY");
        assert_eq!(out.thinking[1], "Intent classified as: ACADEMIC");
        assert_eq!(out.thinking[2], "Context: Ovulation Phase (Days 14-16)");
        assert_eq!(out.thinking[3], "Period Mode: Active");
        assert_eq!(out.thinking.len(), 5);
    }

    #[test]
    fn test_existing_trace_is_extended() {
        let mut input = ctx(SentimentLevel::Neutral, Intent::General, false, CyclePhase::Follicular);
        input.thinking.push("Received message".to_string());
        let out = generate_response(input);
        assert_eq!(out.thinking[0], "Received message");
        assert_eq!(out.thinking[1], "Analyzing sentiment: NEUTRAL");
    }

    #[test]
    fn test_high_distress_alone_triggers_crisis() {
        let out = generate_response(ctx(
            SentimentLevel::HighDistress,
            Intent::Physical,
            true,
            CyclePhase::Menstrual,
        ));
        assert!(out.response.contains("988"));
        assert!(out.thinking.iter().any(|t| t.contains("CRISIS PROTOCOL")));
        assert_eq!(out.resources.unwrap().len(), 3);
    }

    #[test]
    fn test_physical_without_period_mode_is_generic() {
        let out = generate_response(ctx(
            SentimentLevel::Neutral,
            Intent::Physical,
            false,
            CyclePhase::Menstrual,
        ));
        assert!(out.response.contains("general wellness tips"));
        assert!(!out.response.contains("heating pad"));
        assert!(out.resources.is_none());
    }

    #[test]
    fn test_academic_without_luteal_has_no_empty_paragraph() {
        let out = generate_response(ctx(
            SentimentLevel::Neutral,
            Intent::Academic,
            false,
            CyclePhase::Follicular,
        ));
        assert!(out.response.starts_with("Academic stress is real, and you deserve support through this."));
        assert!(!out.response.contains("Luteal"));
        assert!(!out.response.contains("\n\n\n"));
    }

    #[test]
    fn test_empathy_sentiment_reaches_emotional_branch() {
        let out = generate_response(ctx(
            SentimentLevel::Empathy,
            Intent::General,
            false,
            CyclePhase::Follicular,
        ));
        assert!(out.response.starts_with("I'm here for you. Your feelings are valid."));
    }

    #[test]
    fn test_general_opening_varies_on_positive() {
        let positive = render_general_response(SentimentLevel::Positive);
        let neutral = render_general_response(SentimentLevel::Neutral);
        assert!(positive.starts_with("I'm so glad to hear you're doing well!"));
        assert!(neutral.starts_with("I'm here to support you."));
    }
}
