// src/ui/widgets/footer.rs

use crate::app::{App, AppState, ExportStatus};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer: key hints, or the outcome of the last export.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.state, &app.export_status) {
        (AppState::Finished, ExportStatus::Success(path)) => Line::from(vec![
            Span::styled("Exported to ", Style::new().fg(Color::Green)),
            Span::raw(path.as_str()),
            Span::raw("  "),
            key("[N]"),
            Span::raw("ew query"),
        ]),
        (AppState::Finished, ExportStatus::Error(e)) => Line::from(vec![
            Span::styled(format!("Export failed: {}  ", e), Style::new().fg(Color::Red)),
            key("[N]"),
            Span::raw("ew query"),
        ]),
        (AppState::Idle, _) => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to analyze, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        (AppState::Finished, ExportStatus::Idle) => Line::from(vec![
            key("[N]"),
            Span::raw("ew query, "),
            key("[E]"),
            Span::raw("xport, "),
            key("[L]"),
            Span::raw("ogs, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
        (AppState::Rejected(_), _) => Line::from(vec![
            key("[N]"),
            Span::raw("ew query, "),
            key("[Q]"),
            Span::raw("uit"),
        ]),
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
