use crate::ui::app::App;
use crate::ui::count::CountPhase;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, HEADER_TEXT, STATUS_ERROR, STATUS_IDLE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

/// Spinner frames cycled by the event-loop tick.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let phase = app.count().phase();
    frame.render_widget(Header::new().widget(app.endpoint(), phase), header);

    frame.render_widget(Clear, body);
    let lines = body_lines(app, phase);
    let width = lines.iter().map(Line::width).max().unwrap_or(0).max(1) as u16;
    let height = lines.len().max(1) as u16;
    let content = centered_rect_by_size(width, height, body);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);

    frame.render_widget(Footer::new().widget(footer), footer);
}

/// Body content for the current phase.
///
/// Mirrors the screen's four faces: bare spinner before the first fetch,
/// spinner with a label while loading, error with a retry hint, count with
/// a refresh hint.
fn body_lines(app: &App, phase: CountPhase) -> Vec<Line<'static>> {
    match phase {
        CountPhase::Pending => vec![Line::from(Span::styled(
            spinner_frame(app).to_string(),
            Style::default().fg(STATUS_IDLE),
        ))],

        CountPhase::Loading => vec![
            Line::from(Span::styled(
                spinner_frame(app).to_string(),
                Style::default().fg(ACCENT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Loading...",
                Style::default().fg(HEADER_TEXT),
            )),
        ],

        CountPhase::Failed => {
            let message = app.count().error.as_deref().unwrap_or_default();
            vec![
                Line::from(Span::styled(
                    format!("Error: {message}"),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )),
            ]
        }

        CountPhase::Ready => {
            let count = app.count().total_users.unwrap_or_default();
            vec![
                Line::from(Span::styled(
                    format!("Total Users: {count}"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to refresh",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )),
            ]
        }
    }
}

fn spinner_frame(app: &App) -> &'static str {
    SPINNER_FRAMES[app.spinner_tick() % SPINNER_FRAMES.len()]
}
