use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::ops::habit_ops::{self, HabitError};
use crate::ops::transfer;
use crate::tui::app::{App, InputKind, Mode};

pub(super) fn handle_text_entry(app: &mut App, kind: InputKind, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel
        (_, KeyCode::Esc) => {
            app.input_buffer.clear();
            app.mode = Mode::Navigate;
        }

        // Submit
        (_, KeyCode::Enter) => match kind {
            InputKind::HabitName => submit_habit_name(app),
            InputKind::ImportPath => submit_import_path(app),
        },

        (_, KeyCode::Backspace) => {
            app.input_buffer.pop();
        }

        // Text input (allow shift for capitals)
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.input_buffer.push(c);
        }

        _ => {}
    }
}

fn submit_habit_name(app: &mut App) {
    let name = app.input_buffer.clone();
    match habit_ops::add_habit(&mut app.state, &name) {
        Ok(_) => {
            app.input_buffer.clear();
            app.mode = Mode::Navigate;
            // Land on the new habit
            app.cursor = app.state.habits.len().saturating_sub(1);
            app.save();
        }
        Err(HabitError::EmptyName) => {
            // Stay in input mode until there is a real name
            app.notice = Some("Habit name cannot be empty".to_string());
        }
        Err(e) => {
            warn!(error = %e, "add habit failed");
            app.input_buffer.clear();
            app.mode = Mode::Navigate;
        }
    }
}

fn submit_import_path(app: &mut App) {
    let path = app.input_buffer.trim().to_string();
    if path.is_empty() {
        return;
    }
    app.input_buffer.clear();
    app.mode = Mode::Navigate;

    match transfer::import_from_file(Path::new(&path)) {
        Ok(new_state) => {
            app.state = new_state;
            app.clamp_cursor();
            app.save();
            app.notice = Some("Import complete. Data loaded.".to_string());
        }
        Err(e) => {
            // Existing state stays untouched
            warn!(path = %path, error = %e, "import failed");
            app.notice = Some("Import failed. Please check the JSON file format.".to_string());
        }
    }
}
