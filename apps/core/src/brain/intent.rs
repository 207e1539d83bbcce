//! Intent Classification using regex patterns.
//!
//! Pattern-based detection of the conversational purpose of an utterance.
//! Rules are evaluated in a fixed priority order with CRISIS first; the number
//! of patterns matched never changes which rule wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::sentiment::normalize_apostrophes;

/// Detected conversational intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Self-harm or suicidal language
    Crisis,
    /// Period symptoms, pain, body complaints
    Physical,
    /// Exams, school, deadlines
    Academic,
    /// Loneliness, sadness, stress
    Emotional,
    /// Nothing specific matched
    General,
}

impl Intent {
    /// All intents, in classification priority order followed by the fallback
    pub const ALL: [Intent; 5] = [
        Intent::Crisis,
        Intent::Physical,
        Intent::Academic,
        Intent::Emotional,
        Intent::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::Crisis => "CRISIS",
            Intent::Physical => "PHYSICAL",
            Intent::Academic => "ACADEMIC",
            Intent::Emotional => "EMOTIONAL",
            Intent::General => "GENERAL",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Highest-priority intent that matched
    pub primary: Intent,
    /// Lower-priority intents that also matched, in priority order
    pub secondary: Vec<Intent>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Text fragments matched by the primary rule
    pub matched_patterns: Vec<String>,
}

impl IntentResult {
    pub fn general() -> Self {
        Self {
            primary: Intent::General,
            secondary: vec![],
            confidence: 0.0,
            matched_patterns: vec![],
        }
    }
}

/// Pattern definition for intent matching
struct IntentRule {
    intent: Intent,
    patterns: &'static [Regex],
}

/// Intent classifier using regex patterns
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

// Compile patterns once at startup
// NOTE: expect() is acceptable here: the patterns are static literals
static CRISIS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(suicide|suicidal)\b").expect("Invalid regex: suicide words"),
        Regex::new(r"(?i)\b(kill(ing)? my ?self|end(ing)? my life|end it all|take my (own )?life)\b")
            .expect("Invalid regex: self-directed harm phrases"),
        Regex::new(r"(?i)\b(want(ed)? to die|wanna die|better off dead|no reason to live)\b")
            .expect("Invalid regex: death wish phrases"),
        Regex::new(r"(?i)\b(self[- ]?harm|hurt(ing)? my ?self|cut(ting)? my ?self|overdose)\b")
            .expect("Invalid regex: self-harm phrases"),
        Regex::new(r"(?i)\b(can'?t go on|don'?t want to (live|be here))\b")
            .expect("Invalid regex: hopelessness phrases"),
        Regex::new(r"(?i)\b(feel(ing|s)? like dying|kms|(going to|gonna|want to|wanna) end it)\b")
            .expect("Invalid regex: indirect and shorthand phrases"),
    ]
});

static PHYSICAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(cramps?|cramping|period|periods|menstrual|menstruation|pms|pmdd)\b")
            .expect("Invalid regex: menstrual terms"),
        Regex::new(r"(?i)\b(bloat(ed|ing)?|bleeding|spotting|flow)\b")
            .expect("Invalid regex: cycle symptoms"),
        Regex::new(r"(?i)\b(headaches?|migraines?|back ?pain|stomach ?(ache|pain)|nause(a|ous)|dizzy|fever)\b")
            .expect("Invalid regex: body complaints"),
        Regex::new(r"(?i)\b(pain|painful|aches?|aching|sore|sick|fatigue)\b")
            .expect("Invalid regex: generic pain words"),
    ]
});

static ACADEMIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(exams?|tests?|quiz(zes)?|finals|midterms?|jamb|waec)\b")
            .expect("Invalid regex: assessment words"),
        Regex::new(r"(?i)\b(assignments?|homework|essays?|thesis|projects?|deadlines?)\b")
            .expect("Invalid regex: coursework words"),
        Regex::new(r"(?i)\b(stud(y|ying|ies)|revision|lectures?|class(es)?|school|college|universit(y|ies)|semester)\b")
            .expect("Invalid regex: study words"),
        Regex::new(r"(?i)\b(grades?|gpa|cgpa|results?|fail(ed|ing)? (a |my )?(course|class|exam))\b")
            .expect("Invalid regex: grade words"),
    ]
});

static EMOTIONAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(lonely|alone|isolated|heartbroken|miss (him|her|them|home))\b")
            .expect("Invalid regex: loneliness words"),
        Regex::new(r"(?i)\b(sad|depressed|down|low|empty|hopeless|worthless|crying|cry)\b")
            .expect("Invalid regex: low mood words"),
        Regex::new(r"(?i)\b(stress(ed)?|anxious|anxiety|overwhelmed|worried|panic(king)?|scared|afraid)\b")
            .expect("Invalid regex: anxiety words"),
        Regex::new(r"(?i)\b(angry|upset|frustrated|irritable|mood swings?|emotional)\b")
            .expect("Invalid regex: irritability words"),
    ]
});

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with all rules, CRISIS first
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Crisis,
                patterns: CRISIS_PATTERNS.as_slice(),
            },
            IntentRule {
                intent: Intent::Physical,
                patterns: PHYSICAL_PATTERNS.as_slice(),
            },
            IntentRule {
                intent: Intent::Academic,
                patterns: ACADEMIC_PATTERNS.as_slice(),
            },
            IntentRule {
                intent: Intent::Emotional,
                patterns: EMOTIONAL_PATTERNS.as_slice(),
            },
        ];

        Self { rules }
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> IntentResult {
        let text = normalize_apostrophes(text.trim());

        if text.is_empty() {
            return IntentResult::general();
        }

        let mut primary: Option<(Intent, Vec<String>)> = None;
        let mut secondary = Vec::new();

        for rule in &self.rules {
            let matched: Vec<String> = rule
                .patterns
                .iter()
                .filter_map(|p| p.find(&text))
                .map(|m| m.as_str().to_string())
                .collect();

            if matched.is_empty() {
                continue;
            }

            if primary.is_none() {
                primary = Some((rule.intent, matched));
            } else {
                secondary.push(rule.intent);
            }
        }

        match primary {
            Some((intent, matched_patterns)) => {
                let confidence = (0.6 + 0.1 * (matched_patterns.len() as f32 - 1.0)).min(1.0);
                IntentResult {
                    primary: intent,
                    secondary,
                    confidence,
                    matched_patterns,
                }
            }
            None => IntentResult::general(),
        }
    }
}

/// Convenience wrapper around [`IntentClassifier::classify`]
pub fn classify_intent(text: &str) -> IntentResult {
    IntentClassifier::new().classify(text)
}
