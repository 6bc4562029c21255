use crate::model::{Habit, State};

/// Error type for habit operations
#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("habit not found: {0}")]
    NotFound(String),
    #[error("habit name matches more than one habit: {0}")]
    Ambiguous(String),
    #[error("habit name cannot be empty")]
    EmptyName,
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Add a new habit. The name is trimmed; an empty trimmed name is rejected.
/// Returns the id of the new habit.
pub fn add_habit(state: &mut State, name: &str) -> Result<String, HabitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }
    let habit = Habit::new(name);
    let id = habit.id.clone();
    state.habits.push(habit);
    Ok(id)
}

/// Flip the completion flag for (habit, date key). A stale habit id is a
/// silent no-op: the UI may hold an id that a concurrent delete already
/// removed, and dropping the event is the intended behavior.
pub fn toggle_day(state: &mut State, habit_id: &str, date_key: &str) {
    if let Some(habit) = state.habit_mut(habit_id) {
        let entry = habit.log.entry(date_key.to_string()).or_insert(false);
        *entry = !*entry;
    }
}

/// Mark (habit, date key) done regardless of its current value.
/// The shortcut behind the TUI's `t` key and the CLI `tick` command.
pub fn tick_day(state: &mut State, habit_id: &str, date_key: &str) -> Result<(), HabitError> {
    let habit = state
        .habit_mut(habit_id)
        .ok_or_else(|| HabitError::NotFound(habit_id.to_string()))?;
    habit.log.insert(date_key.to_string(), true);
    Ok(())
}

/// Clear the completion flag for (habit, date key).
pub fn untick_day(state: &mut State, habit_id: &str, date_key: &str) -> Result<(), HabitError> {
    let habit = state
        .habit_mut(habit_id)
        .ok_or_else(|| HabitError::NotFound(habit_id.to_string()))?;
    habit.log.insert(date_key.to_string(), false);
    Ok(())
}

/// Remove exactly the habit with the given id.
pub fn delete_habit(state: &mut State, habit_id: &str) -> Result<Habit, HabitError> {
    let idx = state
        .habits
        .iter()
        .position(|h| h.id == habit_id)
        .ok_or_else(|| HabitError::NotFound(habit_id.to_string()))?;
    Ok(state.habits.remove(idx))
}

/// Drop every habit and every log entry.
pub fn reset(state: &mut State) {
    state.habits.clear();
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Resolve a habit by name, case-insensitively on the full name. The CLI
/// addresses habits by name rather than id; a name matching zero or more
/// than one habit is an error there, unlike the TUI's silent stale-id case.
pub fn find_by_name<'a>(state: &'a State, name: &str) -> Result<&'a Habit, HabitError> {
    let needle = name.trim().to_lowercase();
    let mut matches = state
        .habits
        .iter()
        .filter(|h| h.name.to_lowercase() == needle);
    let first = matches
        .next()
        .ok_or_else(|| HabitError::NotFound(name.to_string()))?;
    if matches.next().is_some() {
        return Err(HabitError::Ambiguous(name.to_string()));
    }
    Ok(first)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
