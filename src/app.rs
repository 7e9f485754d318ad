// src/app.rs

use chrono::Utc;
use color_eyre::eyre::Result;
use dorkguard::core::knowledge_base::{self, FindingDetail};
use dorkguard::core::models::{AnalysisResult, RiskTier, TokenKind};
use dorkguard::core::{analyze, serialize, AnalyzerError};
use ratatui::widgets::{ListState, ScrollbarState};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::cli::USAGE;
use crate::logging;

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub enum AppState {
    /// Waiting for the user to type and submit a query.
    Idle,
    /// A result is on screen.
    Finished,
    /// The last query could not be tokenized.
    Rejected(String),
}

#[derive(Debug, Default)]
pub struct QuerySummary {
    pub score: u8,
    pub tier: RiskTier,
    pub signal_count: usize,
    pub operator_count: usize,
    pub unsupported_count: usize,
    pub term_count: usize,
}

pub struct App {
    pub should_quit: bool,
    pub show_disclaimer: bool,
    pub state: AppState,
    pub input: String,
    /// One-line hint shown above the report, e.g. the usage message.
    pub notice: Option<String>,
    pub analysis: Option<AnalysisResult>,
    pub all_findings: Vec<&'static FindingDetail>,
    pub analysis_list_state: ListState,
    pub summary: QuerySummary,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub export_status: ExportStatus,
    pub show_logs: bool,
    pub log_content: Vec<String>,
    pub log_horizontal_scroll: usize,
    pub log_horizontal_scroll_state: ScrollbarState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_disclaimer: true,
            state: AppState::Idle,
            input: String::new(),
            notice: None,
            analysis: None,
            all_findings: Vec::new(),
            analysis_list_state: ListState::default(),
            summary: QuerySummary::default(),
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            export_status: ExportStatus::Idle,
            show_logs: false,
            log_content: Vec::new(),
            log_horizontal_scroll: 0,
            log_horizontal_scroll_state: ScrollbarState::default(),
        }
    }

    /// Analyzes the current input. Empty input only produces the usage hint.
    pub fn submit(&mut self) {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.notice = Some(USAGE.to_string());
            return;
        }
        self.notice = None;

        match analyze(&query) {
            Ok(result) => {
                info!(score = result.risk_score, signals = ?result.risk_signals, "Query analyzed.");
                self.all_findings = knowledge_base::findings_for(&result);
                self.analysis_list_state = ListState::default();
                if !self.all_findings.is_empty() {
                    self.analysis_list_state.select(Some(0));
                }
                self.analysis = Some(result);
                self.state = AppState::Finished;
                self.update_summary();
            }
            Err(e @ AnalyzerError::MalformedInput { .. }) => {
                warn!(error = %e, "Rejected malformed query.");
                self.state = AppState::Rejected(e.to_string());
            }
            Err(e) => {
                error!(error = %e, "Analysis failed.");
                self.state = AppState::Rejected(e.to_string());
            }
        }
    }

    pub fn update_summary(&mut self) {
        if let Some(result) = &self.analysis {
            self.summary = QuerySummary {
                score: result.risk_score,
                tier: result.tier(),
                signal_count: result.risk_signals.len(),
                operator_count: result.count_kind(TokenKind::Operator),
                unsupported_count: result.count_kind(TokenKind::UnknownOperator),
                term_count: result.plain_terms.len(),
            };
        }
    }

    pub fn select_next(&mut self) {
        if self.all_findings.is_empty() {
            return;
        }
        let next = match self.analysis_list_state.selected() {
            Some(i) if i + 1 < self.all_findings.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.analysis_list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.all_findings.is_empty() {
            return;
        }
        let prev = self.analysis_list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.analysis_list_state.select(Some(prev));
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_logs_left(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_sub(4);
        self.log_horizontal_scroll_state =
            self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn scroll_logs_right(&mut self) {
        self.log_horizontal_scroll = self.log_horizontal_scroll.saturating_add(4);
        self.log_horizontal_scroll_state =
            self.log_horizontal_scroll_state.position(self.log_horizontal_scroll);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if self.show_logs {
            self.log_content = logging::read_log_tail();
        }
    }

    /// Writes the current result to the data directory as JSON.
    pub fn export(&mut self) {
        let Some(result) = &self.analysis else {
            return;
        };
        self.export_status = match write_export(&logging::get_data_dir(), result) {
            Ok(path) => {
                info!(path = %path.display(), "Exported analysis.");
                ExportStatus::Success(path.display().to_string())
            }
            Err(e) => {
                error!(error = %e, "Export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.notice = None;
        self.analysis = None;
        self.all_findings = Vec::new();
        self.analysis_list_state = ListState::default();
        self.summary = QuerySummary::default();
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
        self.export_status = ExportStatus::Idle;
    }
}

/// Serializes `result` into `analysis-<UTC timestamp>.json` under `dir`.
pub fn write_export(dir: &Path, result: &AnalysisResult) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let file_name = format!("analysis-{}.json", Utc::now().format("%Y%m%dT%H%M%S%.3fZ"));
    let path = dir.join(file_name);
    fs::write(&path, serialize(result)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(query: &str) -> App {
        let mut app = App::new();
        app.input = query.to_string();
        app.submit();
        app
    }

    #[test]
    fn empty_input_shows_usage_without_analyzing() {
        let app = submitted("   ");
        assert_eq!(app.notice.as_deref(), Some(USAGE));
        assert!(app.analysis.is_none());
        assert!(matches!(app.state, AppState::Idle));
    }

    #[test]
    fn risky_query_fills_summary_and_findings() {
        let app = submitted(r#"site:test.local "index of" .env password"#);
        assert!(matches!(app.state, AppState::Finished));
        assert_eq!(app.summary.score, 90);
        assert_eq!(app.summary.tier, RiskTier::High);
        assert_eq!(app.summary.signal_count, 3);
        assert_eq!(app.summary.operator_count, 1);
        assert_eq!(app.all_findings.len(), 3);
        assert_eq!(app.analysis_list_state.selected(), Some(0));
    }

    #[test]
    fn malformed_query_is_rejected() {
        let app = submitted(r#"site:example.com "unterminated"#);
        assert!(matches!(app.state, AppState::Rejected(_)));
        assert!(app.analysis.is_none());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = submitted("foo:bar secret");
        assert_eq!(app.all_findings.len(), 2);
        app.select_next();
        app.select_next();
        assert_eq!(app.analysis_list_state.selected(), Some(1));
        app.select_previous();
        app.select_previous();
        assert_eq!(app.analysis_list_state.selected(), Some(0));
    }

    #[test]
    fn reset_clears_result() {
        let mut app = submitted("intitle:dashboard");
        app.reset();
        assert!(app.analysis.is_none());
        assert!(app.input.is_empty());
        assert_eq!(app.summary.score, 0);
        assert!(matches!(app.state, AppState::Idle));
    }

    #[test]
    fn export_writes_serialized_result() {
        let dir = tempfile::tempdir().unwrap();
        let result = analyze("ext:sql database.sql").unwrap();
        let path = write_export(dir.path(), &result).unwrap();

        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("analysis-") && file_name.ends_with(".json"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, serialize(&result).unwrap());
    }
}
