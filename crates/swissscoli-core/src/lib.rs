//! # SwissScoli Core Library
//!
//! Business logic for the SwissScoli physiotherapy companion: a fixed
//! catalog of scoliosis exercises, daily completion tracking with a weekly
//! calendar and streak, and a per-exercise countdown timer. The `swissscoli`
//! CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Catalog**: compiled-in exercise definitions
//! - **Progress**: `ProgressTracker` owns the persisted aggregates and
//!   computes percentages, week view, stats and achievements
//! - **Timer**: `CountdownTimer` state machine; the caller drives `tick()`
//! - **Storage**: `KvStore` trait with SQLite and in-memory backends, plus
//!   TOML configuration
//!
//! ## Key Components
//!
//! - [`Catalog`]: exercise reference data
//! - [`ProgressTracker`]: completion log, week ratchet, streak
//! - [`CountdownTimer`]: single-session countdown
//! - [`Database`]: SQLite key-value store
//! - [`Config`]: application configuration

pub mod catalog;
pub mod error;
pub mod events;
pub mod progress;
pub mod storage;
pub mod timer;

pub use catalog::{format_clock, Catalog, Exercise, EXERCISES};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use progress::{
    Achievement, AggregateStats, CompletionLog, DailySummary, ProgressTracker, WeekDay,
    WeekProgress,
};
pub use storage::{Config, Database, KvStore, MemoryStore};
pub use timer::{CountdownTimer, TimerSnapshot, TimerState};
