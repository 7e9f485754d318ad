// src/ui/widgets/input.rs
use ratatui::{layout::Position, prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState};

/// Renders the query input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default().borders(Borders::ALL).title("Search Query");
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Cursor only while typing and not behind the disclaimer.
    if matches!(app.state, AppState::Idle) && !app.show_disclaimer {
        let cursor_x = area.x + app.input.chars().count() as u16 + 1;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}
