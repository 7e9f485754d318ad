// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState};
use crate::ui::widgets::token_table;
use dorkguard::core::knowledge_base::{FindingCategory, FindingDetail};
use dorkguard::core::models::Severity;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    text::Line,
};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Report (navigate with ↑ ↓)");

    match &app.state {
        AppState::Idle => {
            let mut lines = vec![Line::from("Type a query and press Enter to analyze it.")];
            if let Some(notice) = &app.notice {
                lines.push(Line::from(""));
                lines.push(Line::from(notice.as_str().yellow()));
            }
            let p = Paragraph::new(lines).alignment(Alignment::Center).block(main_block);
            frame.render_widget(p, area);
            return;
        }
        AppState::Rejected(message) => {
            let text = vec![
                Line::from(""),
                Line::from("QUERY REJECTED".red().bold()),
                Line::from(""),
                Line::from(message.as_str()),
                Line::from(""),
                Line::from("Close every quote, or escape it with a backslash, then try again."),
            ];
            let p = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(main_block);
            frame.render_widget(p, area);
            return;
        }
        AppState::Finished => {}
    }

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let [list_area, detail_area, token_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .areas(inner_area);

    let items: Vec<ListItem> = app.all_findings.iter().map(|detail| finding_item(detail)).collect();
    let findings_list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(findings_list, list_area, &mut app.analysis_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let selected = app
        .analysis_list_state
        .selected()
        .and_then(|i| app.all_findings.get(i));
    match selected {
        Some(detail) => {
            let text = vec![
                Line::from(""),
                Line::from("WHAT IT IS:".yellow().bold()),
                Line::from(detail.description),
                Line::from(""),
                Line::from("WHAT TO DO:".yellow().bold()),
                Line::from(detail.remediation),
            ];
            let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
            frame.render_widget(p, detail_area);
        }
        None => render_placeholder_details(frame, app, detail_block, detail_area),
    }

    token_table::render_token_table(frame, app, token_area);
}

fn finding_item(detail: &FindingDetail) -> ListItem<'static> {
    let category_prefix = match detail.category {
        FindingCategory::Exposure => "[EXPOSURE] ",
        FindingCategory::Syntax => "[SYNTAX] ",
    };
    let title_style = match detail.severity {
        Severity::Critical => Style::default().fg(Color::Red),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Info => Style::default().fg(Color::Cyan),
    };
    ListItem::new(Line::from(vec![
        Span::styled(category_prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(detail.title, title_style),
    ]))
}

fn render_placeholder_details(frame: &mut Frame, app: &App, block: Block, area: Rect) {
    let placeholder_text = if app.all_findings.is_empty() {
        Text::from(vec![
            Line::from(""),
            Line::from("✓ NO RISK SIGNALS".bold().fg(Color::Green)),
            Line::from(""),
            Line::from("The query does not target credentials, sensitive files or directory listings."),
        ])
    } else {
        Text::from("Select an item above to see details.")
    };

    let p = Paragraph::new(placeholder_text).alignment(Alignment::Center).block(block);
    frame.render_widget(p, area);
}
