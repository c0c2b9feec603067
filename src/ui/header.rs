use crate::ui::count::CountPhase;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_IDLE, STATUS_OK,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Status bar: a dot colored by the last fetch outcome, the app name,
    /// and the endpoint being polled.
    pub fn widget(&self, endpoint: &str, phase: CountPhase) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = Style::default().fg(match phase {
            CountPhase::Ready => STATUS_OK,
            CountPhase::Failed => STATUS_ERROR,
            CountPhase::Pending | CountPhase::Loading => STATUS_IDLE,
        });

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled("usertally", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(display_endpoint(endpoint), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Endpoint without its scheme; the header is tight on columns.
fn display_endpoint(endpoint: &str) -> String {
    endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint)
        .to_string()
}
