use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::habit_ops;
use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(action) = action {
                match action {
                    ConfirmAction::DeleteHabit { id, .. } => {
                        confirm_delete(app, &id);
                    }
                    ConfirmAction::ResetAll => {
                        confirm_reset(app);
                    }
                }
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete(app: &mut App, id: &str) {
    // The habit may have vanished between prompt and answer
    if habit_ops::delete_habit(&mut app.state, id).is_ok() {
        app.clamp_cursor();
        app.save();
    }
}

fn confirm_reset(app: &mut App) {
    habit_ops::reset(&mut app.state);
    app.cursor = 0;
    app.scroll_offset = 0;
    app.save();
    app.notice = Some("All data reset.".to_string());
}
