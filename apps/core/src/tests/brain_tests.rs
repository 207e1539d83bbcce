//! Brain Module Tests
//!
//! End-to-end checks of the classification pipeline and the reply policy.

use crate::brain::{
    analyze_sentiment, classify_intent, generate_response, CompanionBrain, ContextData,
    CyclePhase, Intent, ResponseContext, SentimentLevel, SentimentResult, CRISIS_RESOURCES,
};

fn all_contexts() -> Vec<ContextData> {
    CyclePhase::ALL
        .iter()
        .flat_map(|&phase| [false, true].map(|period| ContextData::new(period, phase)))
        .collect()
}

fn sentiment(level: SentimentLevel) -> SentimentResult {
    SentimentResult {
        level,
        score: 0.6,
        matched_keywords: vec![],
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_cramps_on_period_day_two() {
        let brain = CompanionBrain::new();
        let packet = brain.respond(
            "Cramps are killing me",
            &ContextData::new(true, CyclePhase::Menstrual),
        );

        assert_eq!(packet.intent.primary, Intent::Physical);
        assert!(!packet.is_crisis());
        let text = &packet.response.response;
        assert!(text.contains("Menstrual Phase (Days 1-5)"));
        assert!(text.contains("heating pad"));
        assert!(text.contains("This is the hardest phase"));
        assert!(packet.response.resources.is_none());
    }

    #[test]
    fn test_exam_stress_in_luteal_phase() {
        let brain = CompanionBrain::new();
        let packet = brain.respond(
            "I have an exam tomorrow and I'm so stressed",
            &ContextData::new(false, CyclePhase::Luteal),
        );

        assert_eq!(packet.intent.primary, Intent::Academic);
        assert!(packet.intent.secondary.contains(&Intent::Emotional));
        assert_eq!(packet.sentiment.level, SentimentLevel::Empathy);
        let text = &packet.response.response;
        assert!(text.contains("you deserve support through this"));
        assert!(text.contains("Luteal Phase"));
        assert!(text.contains("Pomodoro"));
    }

    #[test]
    fn test_loneliness_gets_empathy() {
        let brain = CompanionBrain::new();
        let packet = brain.respond("I feel lonely", &ContextData::new(false, CyclePhase::Follicular));

        assert_eq!(packet.intent.primary, Intent::Emotional);
        assert!(packet.response.response.starts_with("I'm here for you. Your feelings are valid."));
        assert!(!packet.response.response.contains("hormonal changes"));
        assert_eq!(
            packet.response.thinking.last().map(String::as_str),
            Some("Activating empathy mode...")
        );
    }

    #[test]
    fn test_positive_small_talk() {
        let brain = CompanionBrain::new();
        let packet = brain.respond(
            "I'm feeling great today",
            &ContextData::new(false, CyclePhase::Ovulation),
        );

        assert_eq!(packet.intent.primary, Intent::General);
        assert_eq!(packet.sentiment.level, SentimentLevel::Positive);
        assert!(packet.response.response.starts_with("I'm so glad to hear you're doing well!"));
    }

    #[test]
    fn test_crisis_wins_over_everything() {
        let brain = CompanionBrain::new();
        let inputs = [
            "I want to kill myself",
            "My cramps are so bad I want to die",
            "Exams are ruining me, I can't go on",
            "I feel so alone I've been thinking about suicide",
            "I feel like dying",
            "i wanna kms",
            "I'm going to end it",
        ];

        for input in inputs {
            for context in all_contexts() {
                let packet = brain.respond(input, &context);
                assert!(packet.is_crisis(), "expected crisis for '{}'", input);
                assert!(packet.response.response.contains("988"));
                assert_eq!(
                    packet.response.resources.as_deref(),
                    Some(&CRISIS_RESOURCES.map(String::from)[..])
                );
                assert!(packet
                    .response
                    .thinking
                    .contains(&"⚠️ CRISIS PROTOCOL ACTIVATED".to_string()));
            }
        }
    }
}

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn test_generator_is_total() {
        for level in SentimentLevel::ALL {
            for intent in Intent::ALL {
                for context in all_contexts() {
                    let response =
                        generate_response(ResponseContext::new(sentiment(level), intent, context));

                    assert!(!response.response.is_empty());
                    assert_eq!(response.thinking.len(), 5, "{:?}/{:?}", level, intent);
                    assert!(!response.response.contains("\n\n\n"));

                    let crisis = intent == Intent::Crisis || level == SentimentLevel::HighDistress;
                    assert_eq!(response.resources.is_some(), crisis);
                }
            }
        }
    }

    #[test]
    fn test_high_distress_overrides_intent() {
        for intent in [Intent::Physical, Intent::Academic, Intent::Emotional, Intent::General] {
            let response = generate_response(ResponseContext::new(
                sentiment(SentimentLevel::HighDistress),
                intent,
                ContextData::new(true, CyclePhase::Menstrual),
            ));
            assert!(response.resources.is_some());
        }
    }

    #[test]
    fn test_empathy_sentiment_reaches_emotional_branch() {
        let response = generate_response(ResponseContext::new(
            sentiment(SentimentLevel::Empathy),
            Intent::General,
            ContextData::new(true, CyclePhase::Luteal),
        ));
        assert!(response.response.contains("Emotional ups and downs during your cycle"));
        assert!(response.response.contains("This is biological, not weakness."));
    }

    #[test]
    fn test_physical_without_period_mode_ignores_phase() {
        let replies: Vec<String> = CyclePhase::ALL
            .iter()
            .map(|&phase| {
                generate_response(ResponseContext::new(
                    sentiment(SentimentLevel::Neutral),
                    Intent::Physical,
                    ContextData::new(false, phase),
                ))
                .response
            })
            .collect();

        assert!(replies.windows(2).all(|w| w[0] == w[1]));
        assert!(replies[0].contains("healthcare provider"));
    }

    #[test]
    fn test_physical_reply_tracks_phase_in_period_mode() {
        let render = |phase| {
            generate_response(ResponseContext::new(
                sentiment(SentimentLevel::Neutral),
                Intent::Physical,
                ContextData::new(true, phase),
            ))
            .response
        };

        let menstrual = render(CyclePhase::Menstrual);
        let ovulation = render(CyclePhase::Ovulation);
        assert_ne!(menstrual, ovulation);
        assert!(ovulation.contains("Your body is working hard"));
    }

    #[test]
    fn test_short_exam_message_in_luteal_period_mode() {
        let packet = CompanionBrain::new()
            .respond("Exam tomorrow", &ContextData::new(true, CyclePhase::Luteal));

        assert_eq!(packet.intent.primary, Intent::Academic);
        assert!(packet.response.response.contains("during your period makes it even harder"));
        assert!(packet
            .response
            .response
            .contains("many people find concentration harder now"));
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let brain = CompanionBrain::new();
        let context = ContextData::new(true, CyclePhase::Luteal);
        for input in ["Exam tomorrow", "I feel lonely", "hello", "", "period pain and stress"] {
            let a = brain.respond(input, &context);
            let b = brain.respond(input, &context);
            assert_eq!(a.response, b.response);
            assert_eq!(a.sentiment, b.sentiment);
            assert_eq!(a.intent, b.intent);
        }
    }

    #[test]
    fn test_free_functions_match_brain() {
        let brain = CompanionBrain::new();
        let (s, i) = brain.analyze("so stressed about my thesis");
        assert_eq!(s, analyze_sentiment("so stressed about my thesis"));
        assert_eq!(i, classify_intent("so stressed about my thesis"));
    }
}
