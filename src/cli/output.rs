use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Habit, State};
use crate::ops::streak::current_streak;
use crate::util::dates::{day_label, parse_date_key, week_keys};
use crate::util::unicode::{display_width, fit_to_width};

/// Marks used in the text grid for done / not done days.
const DONE_MARK: &str = "✓";
const EMPTY_MARK: &str = "·";

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct HabitListJson {
    pub today: String,
    pub week: Vec<String>,
    pub habits: Vec<HabitJson>,
}

#[derive(Serialize)]
pub struct HabitJson {
    pub id: String,
    pub name: String,
    pub streak: u32,
    /// Done flags aligned with the `week` keys, oldest first.
    pub days: Vec<bool>,
}

#[derive(Serialize)]
pub struct StreakJson {
    pub name: String,
    pub streak: u32,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn habit_to_json(habit: &Habit, week: &[String], today: NaiveDate) -> HabitJson {
    HabitJson {
        id: habit.id.clone(),
        name: habit.name.clone(),
        streak: current_streak(habit, today),
        days: week.iter().map(|key| habit.is_done(key)).collect(),
    }
}

pub fn list_to_json(state: &State, today: NaiveDate) -> HabitListJson {
    let week = week_keys(today);
    HabitListJson {
        today: week.last().cloned().unwrap_or_default(),
        habits: state
            .habits
            .iter()
            .map(|h| habit_to_json(h, &week, today))
            .collect(),
        week,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format the habit grid as plain text: header with day labels, one row
/// per habit, streak on the right.
pub fn format_grid(state: &State, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    if state.habits.is_empty() {
        lines.push("(no habits yet — add one with `ty add <name>`)".to_string());
        return lines;
    }

    let week = week_keys(today);
    let name_w = state
        .habits
        .iter()
        .map(|h| display_width(&h.name))
        .max()
        .unwrap_or(0)
        .clamp(5, 24);

    // Header: day labels, today last
    let mut header = format!(" {}", fit_to_width("", name_w));
    for key in &week {
        let label = parse_date_key(key)
            .map(day_label)
            .unwrap_or_else(|| key.clone());
        header.push_str(&format!("  {:<5}", label));
    }
    header.push_str("  streak");
    lines.push(header);

    for habit in &state.habits {
        let mut row = format!(" {}", fit_to_width(&habit.name, name_w));
        for key in &week {
            let mark = if habit.is_done(key) {
                DONE_MARK
            } else {
                EMPTY_MARK
            };
            row.push_str(&format!("  {:<5}", mark));
        }
        row.push_str(&format!("  {:>6}", current_streak(habit, today)));
        lines.push(row);
    }

    lines
}
