use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ConfirmAction, InputKind, Mode};

const KEY_HINTS: &str = "a add  space toggle  t today  d delete  R reset  e export  i import  ? help  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref notice) = app.notice {
                with_right_hint(
                    app,
                    width,
                    vec![Span::styled(
                        format!(" {}", notice),
                        Style::default().fg(app.theme.today).bg(bg),
                    )],
                    "any key to dismiss",
                )
            } else if app.show_key_hints {
                Line::from(Span::styled(
                    format!(" {}", KEY_HINTS),
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Input(kind) => {
            let prompt = match kind {
                InputKind::HabitName => " New habit: ",
                InputKind::ImportPath => " Import from: ",
            };
            let submit_hint = match kind {
                InputKind::HabitName => "Enter add  Esc cancel",
                InputKind::ImportPath => "Enter import  Esc cancel",
            };
            with_right_hint(
                app,
                width,
                vec![
                    Span::styled(prompt, Style::default().fg(app.theme.dim).bg(bg)),
                    Span::styled(
                        app.input_buffer.clone(),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                    // ▌ cursor
                    Span::styled(
                        "\u{258C}",
                        Style::default().fg(app.theme.selection).bg(bg),
                    ),
                ],
                submit_hint,
            )
        }
        Mode::Confirm => {
            let prompt = match &app.confirm {
                Some(ConfirmAction::DeleteHabit { name, .. }) => {
                    format!(" Delete \"{}\"?", name)
                }
                Some(ConfirmAction::ResetAll) => " Delete all habits and logs?".to_string(),
                None => String::new(),
            };
            with_right_hint(
                app,
                width,
                vec![Span::styled(
                    prompt,
                    Style::default().fg(app.theme.today).bg(bg),
                )],
                "y confirm  n cancel",
            )
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad between content spans and a dimmed hint at the right edge
fn with_right_hint<'a>(
    app: &App,
    width: usize,
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
