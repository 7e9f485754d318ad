// src/core/risk.rs

use crate::core::models::{RiskSignal, RiskTier};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Points added for each distinct risk signal that fires.
pub const SIGNAL_WEIGHT: u32 = 30;
/// Points added for each unsupported operator token.
pub const UNSUPPORTED_OPERATOR_WEIGHT: u32 = 10;
pub const MAX_SCORE: u8 = 100;

/// Binds a risk signal to the pattern that detects it.
struct RiskRule<'a> {
    signal: RiskSignal,
    pattern: &'a Lazy<Regex>,
}

// Compiled once, matched case-insensitively against the whole query.
static RE_CREDENTIAL_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(password|passwd|secret|api[_-]?key|token)\b").unwrap());
static RE_SENSITIVE_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\.env|id_rsa|wp-config\.php|config\.json|database\.sql)").unwrap());
static RE_DIRECTORY_LISTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bindex\s+of\b").unwrap());

/// The detector table, evaluated in declared order.
static RULES: &[RiskRule] = &[
    RiskRule { signal: RiskSignal::CredentialKeyword, pattern: &RE_CREDENTIAL_KEYWORD },
    RiskRule { signal: RiskSignal::SensitiveFile, pattern: &RE_SENSITIVE_FILE },
    RiskRule { signal: RiskSignal::DirectoryListing, pattern: &RE_DIRECTORY_LISTING },
];

/// Runs every detector against the raw query and returns the signals that fired,
/// sorted by identifier. A detector contributes at most once.
pub fn detect_signals(query: &str) -> Vec<RiskSignal> {
    let mut signals: Vec<RiskSignal> = RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(query))
        .map(|rule| rule.signal)
        .collect();

    signals.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
    signals.dedup();
    debug!(signals = ?signals, "Risk detection finished.");
    signals
}

/// `min(100, 30 * signals + 10 * unsupported_occurrences)`.
///
/// `unsupported_occurrences` counts every unknown operator token, repeats
/// included, not the deduplicated name list.
pub fn score(signal_count: usize, unsupported_occurrences: usize) -> u8 {
    let signals = u32::try_from(signal_count).unwrap_or(u32::MAX);
    let unsupported = u32::try_from(unsupported_occurrences).unwrap_or(u32::MAX);
    let raw = signals
        .saturating_mul(SIGNAL_WEIGHT)
        .saturating_add(unsupported.saturating_mul(UNSUPPORTED_OPERATOR_WEIGHT));
    raw.min(MAX_SCORE as u32) as u8
}

pub fn recommendation(score: u8) -> &'static str {
    RiskTier::from_score(score).recommendation()
}
