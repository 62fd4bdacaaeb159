//! Persisted daily progress.
//!
//! The tracker owns the three persisted aggregates (completion log,
//! week-completion flags, streak). They are read once when the tracker is
//! built and written back after every mutation.
//!
//! A date's week-completion flag is a ratchet: it is set the first time the
//! day's set holds as many ids as the catalog and never cleared again, so the
//! streak goes up at most once per date.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;

use super::stats::{self, Achievement, AggregateStats, DailySummary, WeekDay};
use crate::catalog::Catalog;
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::storage::KvStore;

pub const COMPLETED_EXERCISES_KEY: &str = "completedExercises";
pub const WEEK_PROGRESS_KEY: &str = "weekProgress";
pub const STREAK_KEY: &str = "streak";

/// Date -> ids completed that day, without duplicates.
pub type CompletionLog = BTreeMap<NaiveDate, Vec<u32>>;
/// Date -> `true` once the day's set reached the catalog size.
pub type WeekProgress = BTreeMap<NaiveDate, bool>;

/// Local calendar date right now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct ProgressTracker<S: KvStore> {
    store: S,
    catalog: Catalog,
    strict_ids: bool,
    completion_log: CompletionLog,
    week_progress: WeekProgress,
    streak: u32,
}

impl<S: KvStore> ProgressTracker<S> {
    /// Load persisted progress from `store`.
    ///
    /// Missing, unreadable or malformed entries fall back to their empty
    /// value; they are logged and never fail construction.
    pub fn new(store: S, catalog: Catalog) -> Self {
        let completion_log = load_json::<CompletionLog>(&store, COMPLETED_EXERCISES_KEY);
        let week_progress = load_json::<WeekProgress>(&store, WEEK_PROGRESS_KEY);
        let streak = load_streak(&store);
        tracing::debug!(
            days_logged = completion_log.len(),
            days_completed = week_progress.len(),
            streak,
            "loaded progress"
        );
        Self {
            store,
            catalog,
            strict_ids: false,
            completion_log,
            week_progress,
            streak,
        }
    }

    /// Reject toggles for ids outside the catalog.
    pub fn with_strict_ids(mut self, strict_ids: bool) -> Self {
        self.strict_ids = strict_ids;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn completion_log(&self) -> &CompletionLog {
        &self.completion_log
    }

    pub fn week_progress(&self) -> &WeekProgress {
        &self.week_progress
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn today_completed(&self) -> Vec<u32> {
        self.completed_on(today())
    }

    /// Ids done on `date`, in the order they were ticked.
    pub fn completed_on(&self, date: NaiveDate) -> Vec<u32> {
        self.completion_log.get(&date).cloned().unwrap_or_default()
    }

    pub fn is_completed_today(&self, exercise_id: u32) -> bool {
        self.is_completed_on(today(), exercise_id)
    }

    pub fn is_completed_on(&self, date: NaiveDate, exercise_id: u32) -> bool {
        self.completion_log
            .get(&date)
            .is_some_and(|ids| ids.contains(&exercise_id))
    }

    pub fn completion_percentage(&self) -> u8 {
        self.completion_percentage_on(today())
    }

    pub fn completion_percentage_on(&self, date: NaiveDate) -> u8 {
        stats::completion_percentage(&self.completion_log, &self.catalog, date)
    }

    pub fn week_view(&self) -> Vec<WeekDay> {
        self.week_view_on(today())
    }

    pub fn week_view_on(&self, today: NaiveDate) -> Vec<WeekDay> {
        stats::week_view(&self.week_progress, today)
    }

    pub fn aggregate_stats(&self) -> AggregateStats {
        stats::aggregate_stats(&self.completion_log, &self.week_progress, self.streak)
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        stats::achievements(&self.aggregate_stats())
    }

    pub fn daily_summary(&self) -> DailySummary {
        self.daily_summary_on(today())
    }

    pub fn daily_summary_on(&self, date: NaiveDate) -> DailySummary {
        DailySummary {
            date,
            completed: stats::completed_in_catalog(&self.completion_log, &self.catalog, date),
            total: self.catalog.len() as u64,
            percentage: self.completion_percentage_on(date),
            streak: self.streak,
            days_completed: self.week_progress.len() as u64,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Flip `exercise_id` in today's completion set.
    ///
    /// # Errors
    /// Fails if strict ids are enabled and the id is unknown, or if the
    /// store rejects the write.
    pub fn toggle_exercise(&mut self, exercise_id: u32) -> Result<Vec<Event>> {
        self.toggle_exercise_on(today(), exercise_id)
    }

    /// Flip `exercise_id` in `date`'s completion set and persist.
    ///
    /// Returns `ExerciseToggled`, followed by `DayCompleted` when this toggle
    /// brought the day's set to the catalog size for a date that had not been
    /// completed before. Unknown ids count toward that size.
    ///
    /// # Errors
    /// See [`ProgressTracker::toggle_exercise`].
    pub fn toggle_exercise_on(&mut self, date: NaiveDate, exercise_id: u32) -> Result<Vec<Event>> {
        if self.strict_ids && !self.catalog.contains(exercise_id) {
            return Err(ValidationError::UnknownExercise { id: exercise_id }.into());
        }

        let day = self.completion_log.entry(date).or_default();
        let completed = match day.iter().position(|&id| id == exercise_id) {
            Some(pos) => {
                day.remove(pos);
                false
            }
            None => {
                day.push(exercise_id);
                true
            }
        };
        let day_full = !self.catalog.is_empty() && day.len() == self.catalog.len();
        tracing::debug!(exercise_id, %date, completed, "toggled exercise");

        let now = Utc::now();
        let mut events = vec![Event::ExerciseToggled {
            exercise_id,
            date,
            completed,
            at: now,
        }];

        let already_completed = self.week_progress.get(&date).copied().unwrap_or(false);
        if day_full && !already_completed {
            self.week_progress.insert(date, true);
            self.streak = self.streak.saturating_add(1);
            tracing::info!(%date, streak = self.streak, "all exercises done for the day");
            events.push(Event::DayCompleted {
                date,
                streak: self.streak,
                at: now,
            });
        }

        self.persist()?;
        Ok(events)
    }

    /// Wipe all progress, in memory and in the store.
    ///
    /// # Errors
    /// Returns an error if the store cannot be cleared or rewritten.
    pub fn reset_all(&mut self) -> Result<Event> {
        self.store.clear()?;
        self.completion_log.clear();
        self.week_progress.clear();
        self.streak = 0;
        self.persist()?;
        tracing::info!("progress reset");
        Ok(Event::DataReset { at: Utc::now() })
    }

    fn persist(&mut self) -> Result<()> {
        let log = serde_json::to_string(&self.completion_log)?;
        let progress = serde_json::to_string(&self.week_progress)?;
        self.store.set(COMPLETED_EXERCISES_KEY, &log)?;
        self.store.set(WEEK_PROGRESS_KEY, &progress)?;
        self.store.set(STREAK_KEY, &self.streak.to_string())?;
        Ok(())
    }
}

fn load_json<T: DeserializeOwned + Default>(store: &impl KvStore, key: &str) -> T {
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "ignoring malformed persisted value");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read persisted value");
            T::default()
        }
    }
}

fn load_streak(store: &impl KvStore) -> u32 {
    match store.get(STREAK_KEY) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(key = STREAK_KEY, error = %e, "ignoring malformed streak");
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!(key = STREAK_KEY, error = %e, "could not read streak");
            0
        }
    }
}
