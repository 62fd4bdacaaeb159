mod engine;

pub use engine::{CountdownTimer, TimerSnapshot, TimerState};
