pub mod config;
pub mod exercises;
pub mod progress;
pub mod reset;
pub mod timer;

use serde::Serialize;
use swissscoli_core::{Catalog, Config, Database, Event, ProgressTracker};

/// How command results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON in JSON mode, otherwise print `text()`.
    pub fn emit<T: Serialize>(
        self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    /// Print a single event.
    pub fn event(self, event: &Event) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{}", describe(event));
        }
        Ok(())
    }
}

/// Tracker over the on-disk database, honoring the user's config.
pub fn open_tracker(config: &Config) -> Result<ProgressTracker<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(ProgressTracker::new(db, Catalog::builtin()).with_strict_ids(config.tracker.strict_ids))
}

pub fn exercise_name(id: u32) -> String {
    Catalog::builtin()
        .get(id)
        .map(|e| e.name.to_string())
        .unwrap_or_else(|| format!("#{id}"))
}

/// One-line human description of an event.
pub fn describe(event: &Event) -> String {
    match event {
        Event::TimerStarted {
            exercise_id,
            duration_secs,
            ..
        } => format!(
            "Timer gestartet: {} ({})",
            exercise_name(*exercise_id),
            swissscoli_core::format_clock(*duration_secs)
        ),
        Event::TimerPaused { remaining_secs, .. } => {
            format!("Pause bei {}", swissscoli_core::format_clock(*remaining_secs))
        }
        Event::TimerResumed { remaining_secs, .. } => {
            format!("Fortsetzen bei {}", swissscoli_core::format_clock(*remaining_secs))
        }
        Event::TimerReset { remaining_secs, .. } => format!(
            "Zurückgesetzt auf {} (pausiert)",
            swissscoli_core::format_clock(*remaining_secs)
        ),
        Event::TimerCompleted { exercise_id, .. } => {
            format!("Zeit abgelaufen: {}", exercise_name(*exercise_id))
        }
        Event::ExerciseToggled {
            exercise_id,
            completed,
            ..
        } => {
            let state = if *completed { "erledigt ✓" } else { "offen" };
            format!("{}: {state}", exercise_name(*exercise_id))
        }
        Event::DayCompleted { streak, .. } => {
            format!("Alle Übungen für heute geschafft! {streak} Tage Serie")
        }
        Event::DataReset { .. } => "Alle Daten wurden zurückgesetzt".to_string(),
    }
}
