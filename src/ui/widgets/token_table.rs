// src/ui/widgets/token_table.rs

use crate::app::App;
use dorkguard::core::models::{AnalysisResult, TokenKind};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
    text::Line,
};

/// Renders the classified tokens followed by the operator table.
/// The list scrolls vertically with PageUp / PageDown.
pub fn render_token_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::TOP).title("Tokens (PgUp / PgDn)");
    let Some(result) = &app.analysis else {
        frame.render_widget(block, area);
        return;
    };

    let lines = build_lines(result);
    let max_offset = lines.len().saturating_sub(1);
    if app.scroll_offset > max_offset {
        app.scroll_offset = max_offset;
    }
    app.report_scroll_state = app
        .report_scroll_state
        .content_length(lines.len())
        .position(app.scroll_offset);

    let inner_area = block.inner(area);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        inner_area,
        &mut app.report_scroll_state,
    );
}

fn build_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(result.tokens.len() + result.operators.len() + 2);

    for token in &result.tokens {
        let (label, style) = match token.kind {
            TokenKind::Operator => ("operator", Style::default().fg(Color::Green)),
            TokenKind::UnknownOperator => ("unknown ", Style::default().fg(Color::Magenta)),
            TokenKind::Term => ("term    ", Style::default().fg(Color::Gray)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", label), style),
            Span::raw(token.value.clone()),
        ]));
    }

    if !result.operators.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from("OPERATORS".bold()));
        for (operator, operands) in &result.operators {
            let quoted: Vec<String> = operands.iter().map(|o| format!("\"{}\"", o)).collect();
            lines.push(Line::from(vec![
                Span::styled(format!("{:<9}", operator.as_ref()), Style::default().fg(Color::Cyan)),
                Span::raw(quoted.join(", ")),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use dorkguard::core::analyze;

    #[test]
    fn lines_cover_tokens_and_operators() {
        let result = analyze("site:a.com site:b.com foo:x report").unwrap();
        let lines = build_lines(&result);
        // 4 tokens, blank line, heading, one operator row
        assert_eq!(lines.len(), 7);
        let last: String = lines[6].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(last, "site     \"a.com\", \"b.com\"");
    }

    #[test]
    fn no_operator_section_without_operators() {
        let result = analyze("annual report").unwrap();
        assert_eq!(build_lines(&result).len(), 2);
    }
}
