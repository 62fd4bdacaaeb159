//! Interactive countdown session for one exercise.
//!
//! The core timer has no clock of its own. This module owns the tick
//! source: a tokio interval polled only while the timer is running and
//! dropped with the session. Commands arrive as lines on stdin:
//! `p` (or an empty line) pauses/resumes, `r` resets, `q` quits.

use std::io::Write;
use std::time::Duration;

use swissscoli_core::{
    Catalog, Config, CountdownTimer, Event, Exercise, ValidationError,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use super::{open_tracker, Output};

const HELP: &str = "p = Pause/Fortsetzen, r = Zurücksetzen, q = Beenden";

/// What the user typed during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCommand {
    Toggle,
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<SessionCommand> {
    match line.trim() {
        "" | "p" => Some(SessionCommand::Toggle),
        "r" => Some(SessionCommand::Reset),
        "q" => Some(SessionCommand::Quit),
        _ => None,
    }
}

/// First tick one full period from now.
fn ticker(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

fn render(timer: &CountdownTimer, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = timer.snapshot();
    if out.json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        print!("\r{}   ", snapshot.clock);
        std::io::stdout().flush()?;
    }
    Ok(())
}

fn emit(event: Option<Event>, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(event) = event {
        if !out.json {
            println!();
        }
        out.event(&event)?;
    }
    Ok(())
}

/// Runs until the countdown completes or the user quits.
/// Returns true if the countdown reached zero.
async fn session(
    exercise: &Exercise,
    period: Duration,
    out: Output,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut timer = CountdownTimer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    emit(timer.start(exercise.id, exercise.duration), out)?;
    render(&timer, out)?;
    let mut tick = ticker(period);

    loop {
        if !timer.is_running() && !stdin_open {
            // Paused with no way to resume.
            return Ok(false);
        }

        tokio::select! {
            _ = tick.tick(), if timer.is_running() => {
                let completed = timer.tick();
                render(&timer, out)?;
                if completed.is_some() {
                    emit(completed, out)?;
                    return Ok(true);
                }
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                match parse_command(&line) {
                    Some(SessionCommand::Toggle) => {
                        let event = timer.toggle();
                        if timer.is_running() {
                            tick = ticker(period);
                        }
                        emit(event, out)?;
                    }
                    Some(SessionCommand::Reset) => {
                        emit(timer.reset(exercise.duration), out)?;
                        render(&timer, out)?;
                    }
                    Some(SessionCommand::Quit) => return Ok(false),
                    None => eprintln!("{HELP}"),
                }
            }
        }
    }
}

pub fn run(id: u32, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let exercise = Catalog::builtin()
        .get(id)
        .ok_or(ValidationError::UnknownExercise { id })?;

    if !out.json {
        println!("{} ({} Sets)", exercise.name, exercise.sets);
        if config.ui.show_instructions {
            for (i, step) in exercise.instructions.iter().enumerate() {
                println!("  {}. {step}", i + 1);
            }
        }
        println!("{HELP}");
    }

    let period = Duration::from_millis(config.timer.tick_interval_ms.max(1));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(session(exercise, period, out));
    // Stdin may still be held by a blocking read; don't wait for it.
    runtime.shutdown_background();
    let completed = result?;
    tracing::debug!(exercise_id = id, completed, "timer session ended");

    if completed && config.timer.auto_complete {
        let mut tracker = open_tracker(&config)?;
        if !tracker.is_completed_today(id) {
            for event in tracker.toggle_exercise(id)? {
                out.event(&event)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_commands() {
        assert_eq!(parse_command("p"), Some(SessionCommand::Toggle));
        assert_eq!(parse_command("  \n"), Some(SessionCommand::Toggle));
        assert_eq!(parse_command("r"), Some(SessionCommand::Reset));
        assert_eq!(parse_command("q\n"), Some(SessionCommand::Quit));
        assert_eq!(parse_command("x"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_waits_a_full_period() {
        let start = Instant::now();
        let mut interval = ticker(Duration::from_secs(1));
        interval.tick().await;
        assert!(Instant::now() - start >= Duration::from_secs(1));
    }
}
