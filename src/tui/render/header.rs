use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the title row and the separator line below it
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "[/]",
            Style::default().fg(app.theme.streak).bg(bg),
        ),
        Span::styled(
            " tally",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Window range, right-aligned: oldest key .. today
    if let (Some(first), Some(last)) = (app.week.first(), app.week.last()) {
        let range = format!("{} .. {}", first, last);
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let range_width = range.chars().count() + 1;
        if content_width + range_width < width {
            let padding = width - content_width - range_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                range,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
    }

    let title = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(title, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line: String = "\u{2500}".repeat(area.width as usize);
    let sep = Paragraph::new(line).style(
        Style::default()
            .fg(app.theme.dim)
            .bg(app.theme.background),
    );
    frame.render_widget(sep, area);
}
