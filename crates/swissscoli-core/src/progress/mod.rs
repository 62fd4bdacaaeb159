//! Daily exercise progress: completion toggling, week-completion ratchet,
//! streak and the statistics derived from them.

mod stats;
mod tracker;

pub use stats::{
    achievements, aggregate_stats, completion_percentage, week_view, Achievement,
    AggregateStats, DailySummary, WeekDay,
};
pub use tracker::{
    today, CompletionLog, ProgressTracker, WeekProgress, COMPLETED_EXERCISES_KEY, STREAK_KEY,
    WEEK_PROGRESS_KEY,
};
