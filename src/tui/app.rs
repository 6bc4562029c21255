use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::io::config_io::read_config;
use crate::io::lock::DirLock;
use crate::io::store;
use crate::model::{Config, Habit, State};
use crate::util::dates::{self, WINDOW_DAYS};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// One-line text entry in the status row
    Input(InputKind),
    /// y/n prompt for a destructive action
    Confirm,
}

/// What the one-line input is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    HabitName,
    ImportPath,
}

/// Destructive action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteHabit { id: String, name: String },
    ResetAll,
}

/// Main application state
pub struct App {
    pub dir: PathBuf,
    pub state: State,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Captured once at startup; the window stays fixed for the whole
    /// session, even across midnight.
    pub today: NaiveDate,
    /// The seven window date keys, oldest first, ending today
    pub week: Vec<String>,
    pub mode: Mode,
    /// Selected habit row
    pub cursor: usize,
    /// Selected day column (0..WINDOW_DAYS, rightmost = today)
    pub day_cursor: usize,
    /// First visible habit row
    pub scroll_offset: usize,
    /// Buffer for Input mode
    pub input_buffer: String,
    /// Pending action for Confirm mode
    pub confirm: Option<ConfirmAction>,
    /// Transient message in the status row, cleared on the next keypress
    pub notice: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: State, config: &Config, dir: PathBuf, today: NaiveDate) -> Self {
        App {
            dir,
            state,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            today,
            week: dates::week_keys(today),
            mode: Mode::Navigate,
            cursor: 0,
            day_cursor: WINDOW_DAYS - 1,
            scroll_offset: 0,
            input_buffer: String::new(),
            confirm: None,
            notice: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// The habit under the cursor
    pub fn selected_habit(&self) -> Option<&Habit> {
        self.state.habits.get(self.cursor)
    }

    /// The date key under the day cursor
    pub fn selected_day(&self) -> &str {
        self.week
            .get(self.day_cursor)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Keep the cursor inside the habit list after mutations
    pub fn clamp_cursor(&mut self) {
        let count = self.state.habits.len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Persist the whole state. On failure the session keeps running on
    /// the in-memory state and the status row shows what happened.
    pub fn save(&mut self) {
        if let Err(e) = store::write_state(&self.dir, &self.state) {
            warn!(error = %e, "state save failed");
            self.notice = Some(format!("Save failed: {}", e));
        }
    }
}

/// Run the TUI application
pub fn run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;

    // One live instance per data directory
    let _lock = DirLock::acquire_default(dir)?;

    let config = match read_config(dir) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "config unreadable, using defaults");
            Config::default()
        }
    };
    let state = store::load_or_default(dir);
    let mut app = App::new(state, &config, dir.to_path_buf(), dates::today());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
