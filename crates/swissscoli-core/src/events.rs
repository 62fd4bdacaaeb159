use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the system produces an Event.
/// The CLI prints them; logging hooks off them too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        exercise_id: u32,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        exercise_id: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerResumed {
        exercise_id: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        exercise_id: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero.
    TimerCompleted {
        exercise_id: u32,
        at: DateTime<Utc>,
    },
    ExerciseToggled {
        exercise_id: u32,
        date: NaiveDate,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// `date` reached a full set for the first time.
    DayCompleted {
        date: NaiveDate,
        streak: u32,
        at: DateTime<Utc>,
    },
    DataReset {
        at: DateTime<Utc>,
    },
}
