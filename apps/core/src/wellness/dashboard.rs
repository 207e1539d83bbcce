use chrono::{DateTime, Timelike, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WisdomTip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const WISDOM_TIPS: [WisdomTip; 5] = [
    WisdomTip { title: "Exam Prep", body: "Break study into small chunks, sis" },
    WisdomTip { title: "Safety Tip", body: "Always let someone know where you are" },
    WisdomTip { title: "Self Love", body: "You are enough, exactly as you are" },
    WisdomTip { title: "Rest Well", body: "Sleep na medicine, make you rest well" },
    WisdomTip { title: "Stay Hydrated", body: "Water na life, drink am well" },
];

/// Greeting for a local hour in `0..24`
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

pub fn greeting_at<Tz: TimeZone>(time: &DateTime<Tz>) -> &'static str {
    greeting_for_hour(time.hour())
}

/// Same tip all day, a different one the next
pub fn tip_for_day(ordinal: u32) -> &'static WisdomTip {
    &WISDOM_TIPS[ordinal as usize % WISDOM_TIPS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(16), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn test_greeting_at_timestamp() {
        let evening = Utc.with_ymd_and_hms(2024, 5, 1, 19, 30, 0).unwrap();
        assert_eq!(greeting_at(&evening), "Good Evening");
    }

    #[test]
    fn test_tip_rotation() {
        assert_eq!(tip_for_day(0).title, "Exam Prep");
        assert_eq!(tip_for_day(4).title, "Stay Hydrated");
        assert_eq!(tip_for_day(5), tip_for_day(0));
    }
}
