//! Daily progress commands: today, week, toggle, stats, achievements.

use serde::Serialize;
use swissscoli_core::{Config, DailySummary, WeekDay};

use super::{open_tracker, Output};

#[derive(Serialize)]
struct TodayView {
    #[serde(flatten)]
    summary: DailySummary,
    week: Vec<WeekDay>,
}

fn render_week(week: &[WeekDay]) -> String {
    week.iter()
        .map(|day| {
            let mark = if day.is_completed { "✓" } else { "·" };
            if day.is_today {
                format!("[{} {mark}]", day.label)
            } else {
                format!(" {} {mark} ", day.label)
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

pub fn today(out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker(&Config::load_or_default())?;
    let view = TodayView {
        summary: tracker.daily_summary(),
        week: tracker.week_view(),
    };

    out.emit(&view, || {
        let s = &view.summary;
        let mut lines = vec![format!("Heute ({})", s.date.format("%d.%m.%Y"))];
        if s.streak > 0 {
            lines.push(format!("🔥 {} Tage Serie", s.streak));
        }
        lines.push(format!(
            "{}%  {}/{} Übungen",
            s.percentage, s.completed, s.total
        ));
        lines.push(String::new());
        lines.push("Diese Woche".to_string());
        lines.push(render_week(&view.week));
        lines.push(format!("Abgeschlossene Tage: {}", s.days_completed));
        lines.join("\n")
    })
}

pub fn week(out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker(&Config::load_or_default())?;
    let week = tracker.week_view();
    out.emit(&week, || render_week(&week))
}

pub fn toggle(id: u32, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker(&Config::load_or_default())?;
    for event in tracker.toggle_exercise(id)? {
        out.event(&event)?;
    }
    if !out.json {
        let summary = tracker.daily_summary();
        println!(
            "{}%  {}/{} Übungen",
            summary.percentage, summary.completed, summary.total
        );
    }
    Ok(())
}

pub fn stats(out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker(&Config::load_or_default())?;
    let stats = tracker.aggregate_stats();
    out.emit(&stats, || {
        format!(
            "Aktuelle Serie: {}\nTrainingstage:  {}\nÜbungen total:  {}\nØ pro Tag:      {}",
            stats.streak,
            stats.total_trained_days,
            stats.total_exercises_completed,
            stats.average_per_day
        )
    })
}

pub fn achievements(out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker(&Config::load_or_default())?;
    let list = tracker.achievements();
    out.emit(&list, || {
        list.iter()
            .map(|a| {
                let mark = if a.unlocked { "🏆" } else { "🔒" };
                format!("{mark} {} - {}", a.name, a.description)
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
