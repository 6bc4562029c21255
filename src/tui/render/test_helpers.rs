use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::{Config, Habit, State};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Fixed "today" (a Monday) so rendered day labels are stable.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

fn state_with(names: &[&str]) -> State {
    State {
        habits: names.iter().map(|n| Habit::new(*n)).collect(),
    }
}

/// An App over a throwaway path, for tests that never persist.
pub fn app_with_habits(names: &[&str]) -> App {
    App::new(
        state_with(names),
        &Config::default(),
        std::env::temp_dir().join("tally-render-tests"),
        fixed_today(),
    )
}

/// An App wired to a real temp data directory, for handlers that save.
pub fn tmp_app(names: &[&str]) -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let app = App::new(
        state_with(names),
        &Config::default(),
        dir.path().to_path_buf(),
        fixed_today(),
    );
    (app, dir)
}
