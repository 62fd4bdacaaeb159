//! Exercise catalog commands.

use clap::Subcommand;
use serde::Serialize;
use swissscoli_core::{Config, Exercise, ValidationError};

use super::{open_tracker, Output};

#[derive(Subcommand)]
pub enum ExercisesAction {
    /// List all exercises with today's completion marks
    List,
    /// Show an exercise with its instructions
    Show {
        /// Exercise ID
        id: u32,
    },
}

#[derive(Serialize)]
struct ExerciseView {
    #[serde(flatten)]
    exercise: &'static Exercise,
    duration_minutes: u32,
    completed_today: bool,
}

pub fn run(action: ExercisesAction, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker(&Config::load_or_default())?;
    let catalog = *tracker.catalog();

    match action {
        ExercisesAction::List => {
            let views: Vec<ExerciseView> = catalog
                .list_exercises()
                .iter()
                .map(|exercise| ExerciseView {
                    exercise,
                    duration_minutes: exercise.duration_minutes(),
                    completed_today: tracker.is_completed_today(exercise.id),
                })
                .collect();
            let done = views.iter().filter(|v| v.completed_today).count();

            out.emit(&views, || {
                let mut lines = vec![format!("{done} von {} abgeschlossen", views.len())];
                for v in &views {
                    let mark = if v.completed_today { "[x]" } else { "[ ]" };
                    lines.push(format!(
                        "{mark} {:>2}  {}  ({} Min • {} Sets • {})",
                        v.exercise.id,
                        v.exercise.name,
                        v.duration_minutes,
                        v.exercise.sets,
                        v.exercise.category
                    ));
                }
                lines.join("\n")
            })
        }
        ExercisesAction::Show { id } => {
            let exercise = catalog
                .get(id)
                .ok_or(ValidationError::UnknownExercise { id })?;
            let view = ExerciseView {
                exercise,
                duration_minutes: exercise.duration_minutes(),
                completed_today: tracker.is_completed_today(id),
            };

            out.emit(&view, || {
                let mut lines = vec![
                    exercise.name.to_string(),
                    format!(
                        "{} Sets • {} Minuten • {}",
                        exercise.sets, view.duration_minutes, exercise.category
                    ),
                    String::new(),
                    exercise.description.to_string(),
                    String::new(),
                ];
                for (i, step) in exercise.instructions.iter().enumerate() {
                    lines.push(format!("{}. {step}", i + 1));
                }
                lines.push(String::new());
                lines.push(if view.completed_today {
                    "Erledigt ✓".to_string()
                } else {
                    "Noch nicht erledigt".to_string()
                });
                lines.join("\n")
            })
        }
    }
}
