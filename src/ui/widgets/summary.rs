// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use dorkguard::core::models::RiskTier;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    text::Line,
};

fn tier_style(tier: RiskTier) -> Style {
    match tier {
        RiskTier::High => Style::default().fg(Color::Red),
        RiskTier::Moderate => Style::default().fg(Color::Yellow),
        RiskTier::Low => Style::default().fg(Color::Green),
    }
}

/// Renders the summary panel: risk score, gauge, recommendation and counts.
/// Nothing is drawn inside the panel until a query has been analyzed.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let [score_area, gauge_area, _, advice_area, _, counts_area, _, unsupported_area] = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Score & tier
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Recommendation
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Counts
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Unsupported operators
        ])
        .areas(area);

    if !matches!(app.state, AppState::Finished) {
        return;
    }
    let Some(result) = &app.analysis else {
        return;
    };
    let style = tier_style(app.summary.tier);

    // --- Score & Tier ---
    let score_line = Line::from(format!("{}/100 ({} risk)", app.summary.score, app.summary.tier)).style(style);
    let score_text = Text::from(vec![Line::from("Risk Score".bold()), score_line]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), score_area);

    let score_gauge = Gauge::default()
        .percent(u16::from(app.summary.score))
        .label("")
        .style(style);
    frame.render_widget(score_gauge, gauge_area);

    // --- Recommendation ---
    let advice = Paragraph::new(result.recommendation.as_str())
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("RECOMMENDATION".bold()));
    frame.render_widget(advice, advice_area);

    // --- Counts ---
    let counts = Text::from(vec![
        Line::from(vec![Span::raw("Risk signals:   "), Span::styled(app.summary.signal_count.to_string(), Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("Operators:      "), Span::styled(app.summary.operator_count.to_string(), Style::default().fg(Color::Green))]),
        Line::from(vec![Span::raw("Unknown ops:    "), Span::styled(app.summary.unsupported_count.to_string(), Style::default().fg(Color::Magenta))]),
        Line::from(vec![Span::raw("Plain terms:    "), Span::raw(app.summary.term_count.to_string())]),
    ]);
    frame.render_widget(Paragraph::new(counts).block(Block::default().title("BREAKDOWN".bold())), counts_area);

    // --- Unsupported operators ---
    let unsupported_lines: Vec<Line> = if result.unsupported_operators.is_empty() {
        vec![Line::from("None.")]
    } else {
        result
            .unsupported_operators
            .iter()
            .map(|name| Line::from(vec![Span::raw("- "), Span::styled(name.as_str(), Style::default().fg(Color::Magenta))]))
            .collect()
    };
    let unsupported = Paragraph::new(unsupported_lines).block(Block::default().title("UNSUPPORTED OPERATORS".bold()));
    frame.render_widget(unsupported, unsupported_area);
}
