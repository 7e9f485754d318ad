// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the acceptable-use notice as a centered popup over the interface.
/// It stays until the user presses Enter (or Esc to leave).
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("ACCEPTABLE USE".bold().yellow()),
        Line::from(""),
        Line::from("dorkguard reviews search queries so that risky ones can be gated before anyone runs them. It never sends a query to a search engine."),
        Line::from(""),
        Line::from("Queries that hunt for credentials, private keys or exposed files are reconnaissance. Running them against assets you are not authorized to assess may be illegal."),
        Line::from(""),
        Line::from("By continuing you agree to:"),
        Line::from("1. Use the results to protect systems you own or are engaged to test."),
        Line::from("2. Treat a high-risk score as a signal to stop and get approval."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to continue, ".bold() + "Esc".bold().yellow() + " to quit".bold()),
    ]);

    let block = Block::default()
        .title("Notice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(64, 60, area);
    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    // Clear first so the report underneath does not bleed through.
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A `Rect` of the given percentage size centered in `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .areas(r);

    let [_, center, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .areas(middle);
    center
}
