// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas for each widget, computed once per frame.
pub struct AppLayout {
    pub input: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub footer: Rect,
    /// Empty when the log panel is hidden.
    pub log_panel: Rect,
}

/// Splits the frame into the input row, the content row and the footer.
///
/// The content row holds the report and the summary side by side; when
/// `show_logs` is set a third column is added for the log panel.
pub fn create_layout(frame_size: Rect, show_logs: bool) -> AppLayout {
    let [input, content, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .areas(frame_size);

    if show_logs {
        let [report, summary, log_panel] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
            ])
            .areas(content);
        AppLayout { input, report, summary, footer, log_panel }
    } else {
        let [report, summary] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .areas(content);
        AppLayout { input, report, summary, footer, log_panel: Rect::default() }
    }
}
