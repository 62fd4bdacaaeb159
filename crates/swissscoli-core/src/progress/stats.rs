//! Derived views over the progress aggregates.
//!
//! Everything here is a pure function of the completion log, the
//! week-completion flags and the streak. Nothing is cached.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{CompletionLog, WeekProgress};
use crate::catalog::{Catalog, WEEKDAY_LABELS};

/// Totals shown on the progress screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub streak: u32,
    pub total_trained_days: u64,
    pub total_exercises_completed: u64,
    pub average_per_day: u64,
}

/// One day cell of the Monday-first week strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub label: String,
    pub is_completed: bool,
    pub is_today: bool,
}

/// Headline numbers for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub completed: u64,
    pub total: u64,
    pub percentage: u8,
    pub streak: u32,
    /// Number of dates that ever reached full completion.
    pub days_completed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Integer division rounding halves up. `den` must be non-zero.
fn round_div(num: u64, den: u64) -> u64 {
    (2 * num + den) / (2 * den)
}

/// Catalog exercises present in `date`'s completion set.
pub(crate) fn completed_in_catalog(log: &CompletionLog, catalog: &Catalog, date: NaiveDate) -> u64 {
    log.get(&date)
        .map(|ids| ids.iter().filter(|id| catalog.contains(**id)).count() as u64)
        .unwrap_or(0)
}

/// `round(100 * k / n)`, or 0 for an empty catalog.
pub fn completion_percentage(log: &CompletionLog, catalog: &Catalog, date: NaiveDate) -> u8 {
    if catalog.is_empty() {
        return 0;
    }
    let done = completed_in_catalog(log, catalog, date);
    round_div(100 * done, catalog.len() as u64).min(100) as u8
}

/// The seven days of `today`'s calendar week, Monday first.
pub fn week_view(week_progress: &WeekProgress, today: NaiveDate) -> Vec<WeekDay> {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(offset, label)| {
            let date = monday + Duration::days(offset as i64);
            WeekDay {
                date,
                label: (*label).to_string(),
                is_completed: week_progress.get(&date).copied().unwrap_or(false),
                is_today: date == today,
            }
        })
        .collect()
}

pub fn aggregate_stats(log: &CompletionLog, week_progress: &WeekProgress, streak: u32) -> AggregateStats {
    let total_trained_days = week_progress.len() as u64;
    let total_exercises_completed = log.values().map(|ids| ids.len() as u64).sum();
    let average_per_day = if total_trained_days > 0 {
        round_div(total_exercises_completed, total_trained_days)
    } else {
        0
    };
    AggregateStats {
        streak,
        total_trained_days,
        total_exercises_completed,
        average_per_day,
    }
}

/// Fixed achievement list, in display order.
pub fn achievements(stats: &AggregateStats) -> Vec<Achievement> {
    vec![
        Achievement {
            name: "Erste Übung",
            description: "Erste Übung abgeschlossen",
            unlocked: stats.total_exercises_completed >= 1,
        },
        Achievement {
            name: "7-Tage Serie",
            description: "Eine Woche am Stück trainiert",
            unlocked: stats.streak >= 7,
        },
        Achievement {
            name: "Fleissig",
            description: "50 Übungen abgeschlossen",
            unlocked: stats.total_exercises_completed >= 50,
        },
        Achievement {
            name: "Durchhalter",
            description: "30 Tage trainiert",
            unlocked: stats.total_trained_days >= 30,
        },
    ]
}
