use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Represents a single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The unique identifier for the message (UUID).
    pub id: Uuid,
    /// The role of the message author.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
    /// Thinking trace shown under assistant replies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thinking: Vec<String>,
    /// Sentiment badge (assistant replies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    /// Intent badge (assistant replies only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into())
    }

    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            thinking: vec![],
            sentiment: None,
            intent: None,
            created_at: Utc::now(),
        }
    }
}

/// Reply languages offered during onboarding and on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreferredLanguage {
    #[default]
    English,
    #[serde(rename = "Nigerian Pidgin")]
    NigerianPidgin,
    Yoruba,
    Hausa,
    Igbo,
}

impl PreferredLanguage {
    pub const ALL: [PreferredLanguage; 5] = [
        PreferredLanguage::English,
        PreferredLanguage::NigerianPidgin,
        PreferredLanguage::Yoruba,
        PreferredLanguage::Hausa,
        PreferredLanguage::Igbo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PreferredLanguage::English => "English",
            PreferredLanguage::NigerianPidgin => "Nigerian Pidgin",
            PreferredLanguage::Yoruba => "Yoruba",
            PreferredLanguage::Hausa => "Hausa",
            PreferredLanguage::Igbo => "Igbo",
        }
    }
}

impl fmt::Display for PreferredLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PreferredLanguage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::Validation(format!("Unsupported language: {}", wanted)))
    }
}

/// User profile as stored by the hosted backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Profile {
    /// Name the companion uses; optional.
    #[validate(length(min = 1, max = 80))]
    pub display_name: Option<String>,
    pub preferred_language: PreferredLanguage,
}

impl Profile {
    /// Build a profile from form input. A blank name is stored as no name.
    pub fn new(display_name: &str, preferred_language: PreferredLanguage) -> Result<Self, AppError> {
        let name = display_name.trim();
        let profile = Self {
            display_name: (!name.is_empty()).then(|| name.to_string()),
            preferred_language,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Mood tag on a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Loved,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Sad, Mood::Neutral, Mood::Loved, Mood::Excited];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Loved => "Loved",
            Mood::Excited => "Excited",
        }
    }
}

/// Unvalidated journal form input.
#[derive(Debug, Clone, Default)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
}

/// A journal row ready to hand to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewJournalEntry {
    pub user_id: Uuid,
    #[validate(length(max = 120))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: String,
    pub mood: Option<Mood>,
}

impl JournalDraft {
    /// Trim and validate the draft. Empty content is rejected; an empty title is dropped.
    pub fn into_entry(self, user_id: Uuid) -> Result<NewJournalEntry, AppError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("Please write something".to_string()));
        }
        let title = self.title.trim();

        let entry = NewJournalEntry {
            user_id,
            title: (!title.is_empty()).then(|| title.to_string()),
            content: content.to_string(),
            mood: self.mood,
        };
        entry.validate()?;
        Ok(entry)
    }
}

/// A journal row as read back from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
}
