//! Wellness Tests

use crate::models::{JournalDraft, JournalEntry, Mood};
use crate::wellness::{
    entries_on_date, latest_entry, mood_breakdown, sort_newest_first, BreathingExercise,
    BreathingPhase, TOTAL_CYCLES,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

#[test]
fn test_breathing_instructions_follow_phase() {
    let mut exercise = BreathingExercise::new();
    let mut seen = Vec::new();
    loop {
        seen.push((exercise.instruction(), exercise.current_duration().as_secs()));
        if exercise.advance().is_none() {
            break;
        }
    }

    assert_eq!(seen.len(), 3 * TOTAL_CYCLES as usize);
    assert_eq!(&seen[..3], &[("Breathe In", 4), ("Hold", 2), ("Breathe Out", 4)]);
    assert_eq!(exercise.progress_label(), "Cycle 5 of 5");
    assert_eq!(exercise.phase(), BreathingPhase::Exhale);
}

#[test]
fn test_journal_draft_to_daily_view() {
    let user_id = Uuid::new_v4();
    let draft = JournalDraft {
        title: "  ".to_string(),
        content: "  Aced my quiz today  ".to_string(),
        mood: Some(Mood::Excited),
    };
    let new_entry = draft.into_entry(user_id).unwrap();
    assert!(new_entry.title.is_none());
    assert_eq!(new_entry.content, "Aced my quiz today");

    let morning = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let mut entries = vec![
        JournalEntry {
            id: Uuid::new_v4(),
            title: new_entry.title.clone(),
            content: new_entry.content.clone(),
            mood: new_entry.mood,
            created_at: morning,
        },
        JournalEntry {
            id: Uuid::new_v4(),
            title: Some("Tired".to_string()),
            content: "Long day".to_string(),
            mood: Some(Mood::Sad),
            created_at: morning + Duration::hours(12),
        },
        JournalEntry {
            id: Uuid::new_v4(),
            title: None,
            content: "Yesterday".to_string(),
            mood: Some(Mood::Excited),
            created_at: morning - Duration::days(1),
        },
    ];

    let today = entries_on_date(&entries, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(), &Utc);
    assert_eq!(today.len(), 2);

    assert_eq!(latest_entry(&entries).unwrap().content, "Long day");
    sort_newest_first(&mut entries);
    assert_eq!(entries[2].content, "Yesterday");
    assert_eq!(mood_breakdown(&entries)[&Mood::Excited], 2);
}

#[test]
fn test_empty_journal_draft_rejected() {
    let draft = JournalDraft {
        content: "   ".to_string(),
        ..Default::default()
    };
    let err = draft.into_entry(Uuid::new_v4()).unwrap_err();
    assert!(err.to_string().contains("Please write something"));
}
