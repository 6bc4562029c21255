use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::ops::{habit_ops, transfer};
use crate::tui::app::{App, ConfirmAction, InputKind, Mode};
use crate::util::dates::{WINDOW_DAYS, date_key};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    // Any keypress dismisses a transient notice
    app.notice = None;

    match (key.modifiers, key.code) {
        // Quit: q
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Help overlay
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Habit cursor
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.state.habits.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.state.habits.len().saturating_sub(1);
        }

        // Day cursor
        (KeyModifiers::NONE, KeyCode::Char('h')) | (_, KeyCode::Left) => {
            app.day_cursor = app.day_cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('l')) | (_, KeyCode::Right) => {
            if app.day_cursor + 1 < WINDOW_DAYS {
                app.day_cursor += 1;
            }
        }

        // Toggle the selected cell
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (_, KeyCode::Enter) => {
            toggle_selected(app);
        }

        // Tick today for the selected habit
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            tick_today(app);
        }

        // Add habit: prompt for a name
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input_buffer.clear();
            app.mode = Mode::Input(InputKind::HabitName);
        }

        // Delete the selected habit (confirmed)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(habit) = app.selected_habit() {
                app.confirm = Some(ConfirmAction::DeleteHabit {
                    id: habit.id.clone(),
                    name: habit.name.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }

        // Wipe everything (confirmed)
        (KeyModifiers::SHIFT, KeyCode::Char('R')) => {
            app.confirm = Some(ConfirmAction::ResetAll);
            app.mode = Mode::Confirm;
        }

        // Export to habits-export.json in the working directory
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            export(app);
        }

        // Import: prompt for a path
        (KeyModifiers::NONE, KeyCode::Char('i')) => {
            app.input_buffer = transfer::EXPORT_FILE_NAME.to_string();
            app.mode = Mode::Input(InputKind::ImportPath);
        }

        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    let Some(habit) = app.selected_habit() else {
        return;
    };
    let id = habit.id.clone();
    let key = app.selected_day().to_string();
    habit_ops::toggle_day(&mut app.state, &id, &key);
    app.save();
}

fn tick_today(app: &mut App) {
    let Some(habit) = app.selected_habit() else {
        return;
    };
    let id = habit.id.clone();
    let key = date_key(app.today);
    if habit_ops::tick_day(&mut app.state, &id, &key).is_ok() {
        app.save();
    }
}

fn export(app: &mut App) {
    match transfer::export_to_file(&app.state, Path::new(transfer::EXPORT_FILE_NAME)) {
        Ok(()) => {
            app.notice = Some(format!(
                "Exported {} habits to {}",
                app.state.habits.len(),
                transfer::EXPORT_FILE_NAME
            ));
        }
        Err(e) => {
            warn!(error = %e, "export failed");
            app.notice = Some(format!("Export failed: {}", e));
        }
    }
}
