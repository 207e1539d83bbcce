//! Wellness tools that sit beside the chat: guided breathing, journal views and
//! the dashboard greeting.

pub mod breathing;
pub mod dashboard;
pub mod journal;

pub use breathing::{BreathingExercise, BreathingPhase, TOTAL_CYCLES};
pub use dashboard::{greeting_at, greeting_for_hour, tip_for_day, WisdomTip, WISDOM_TIPS};
pub use journal::{entries_on_date, latest_entry, mood_breakdown, sort_newest_first};
