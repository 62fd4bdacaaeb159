//! Countdown timer for a single exercise session.
//!
//! The timer does not own a thread or a clock. The caller invokes `tick()`
//! once per elapsed second while the timer is running, and stops calling it
//! as soon as `is_running()` turns false.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -start-> Running -pause-> Paused -resume-> Running
//! Running -tick (remaining hits 0)-> Idle
//! any -reset-> Paused
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::format_clock;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Point-in-time view of the timer, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub state: TimerState,
    pub exercise_id: Option<u32>,
    pub remaining_secs: u32,
    /// `M:SS`
    pub clock: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    state: TimerState,
    /// Exercise the current session belongs to.
    exercise_id: Option<u32>,
    remaining_secs: u32,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    /// A timer with no session.
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            exercise_id: None,
            remaining_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn exercise_id(&self) -> Option<u32> {
        self.exercise_id
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.state,
            exercise_id: self.exercise_id,
            remaining_secs: self.remaining_secs,
            clock: format_clock(self.remaining_secs),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a new session, discarding any previous one.
    ///
    /// A zero duration has nothing to count down and leaves the timer Idle.
    pub fn start(&mut self, exercise_id: u32, duration_secs: u32) -> Option<Event> {
        self.exercise_id = Some(exercise_id);
        self.remaining_secs = duration_secs;
        if duration_secs == 0 {
            self.state = TimerState::Idle;
            return None;
        }
        self.state = TimerState::Running;
        tracing::debug!(exercise_id, duration_secs, "timer started");
        Some(Event::TimerStarted {
            exercise_id,
            duration_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Paused;
        tracing::debug!(remaining = self.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            exercise_id: self.exercise_id?,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.state = TimerState::Running;
        tracing::debug!(remaining = self.remaining_secs, "timer resumed");
        Some(Event::TimerResumed {
            exercise_id: self.exercise_id?,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Pause when running, resume when paused.
    pub fn toggle(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => self.pause(),
            TimerState::Paused => self.resume(),
            TimerState::Idle => None,
        }
    }

    /// Rewind to `duration_secs` without resuming.
    pub fn reset(&mut self, duration_secs: u32) -> Option<Event> {
        self.state = TimerState::Paused;
        self.remaining_secs = duration_secs;
        tracing::debug!(duration_secs, "timer reset");
        Some(Event::TimerReset {
            exercise_id: self.exercise_id?,
            remaining_secs: duration_secs,
            at: Utc::now(),
        })
    }

    /// Advance by one second. Returns `Some(Event::TimerCompleted)` when the
    /// countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }
        self.state = TimerState::Idle;
        tracing::debug!(exercise_id = ?self.exercise_id, "timer completed");
        Some(Event::TimerCompleted {
            exercise_id: self.exercise_id?,
            at: Utc::now(),
        })
    }
}
