use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::streak::current_streak;
use crate::tui::app::App;
use crate::util::dates::{day_label, parse_date_key};
use crate::util::unicode::{display_width, fit_to_width};

const DONE_MARK: &str = "✓";
const EMPTY_MARK: &str = "·";

/// Render the habit grid: a day-label header row, then one row per habit
/// with seven tick cells and the current streak.
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    // Keep cursor and scroll consistent with the habit list and the
    // visible height (one row is taken by the column header).
    let visible_height = area.height.saturating_sub(1) as usize;
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor - (visible_height - 1);
    }

    let name_w = app
        .state
        .habits
        .iter()
        .map(|h| display_width(&h.name))
        .max()
        .unwrap_or(0)
        .clamp(5, 24);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(header_row(app, name_w));

    if app.state.habits.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " no habits yet — press a to add one",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        let end = (app.scroll_offset + visible_height).min(app.state.habits.len());
        for row in app.scroll_offset..end {
            lines.push(habit_row(app, row, name_w));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Column header: blank name cell, seven day labels (today last), streak
fn header_row(app: &App, name_w: usize) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" {}", fit_to_width("", name_w)),
        Style::default().bg(bg),
    ));

    let last = app.week.len().saturating_sub(1);
    for (col, key) in app.week.iter().enumerate() {
        let label = parse_date_key(key)
            .map(day_label)
            .unwrap_or_else(|| key.clone());
        let style = if col == last {
            Style::default()
                .fg(app.theme.today)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!("  {:<5}", label), style));
    }

    spans.push(Span::styled(
        "  streak",
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    Line::from(spans)
}

fn habit_row(app: &App, row: usize, name_w: usize) -> Line<'static> {
    let bg = app.theme.background;
    let habit = &app.state.habits[row];
    let is_selected_row = row == app.cursor;
    let mut spans: Vec<Span> = Vec::new();

    let name_style = if is_selected_row {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    spans.push(Span::styled(
        format!(" {}", fit_to_width(&habit.name, name_w)),
        name_style,
    ));

    for (col, key) in app.week.iter().enumerate() {
        let done = habit.is_done(key);
        let mark = if done { DONE_MARK } else { EMPTY_MARK };

        spans.push(Span::styled("  ", Style::default().bg(bg)));
        let cell_style = if is_selected_row && col == app.day_cursor {
            // Keyboard focus: inverted cell
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.selection)
                .add_modifier(Modifier::BOLD)
        } else if done {
            Style::default().fg(app.theme.done).bg(bg)
        } else {
            Style::default().fg(app.theme.missed).bg(bg)
        };
        spans.push(Span::styled(format!("{:^5}", mark), cell_style));
    }

    let streak = current_streak(habit, app.today);
    let streak_style = if streak > 0 {
        Style::default()
            .fg(app.theme.streak)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    spans.push(Span::styled(format!("  {:>6}", streak), streak_style));

    Line::from(spans)
}
