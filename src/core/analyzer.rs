// src/core/analyzer.rs

use crate::core::classifier::classify;
use crate::core::error::AnalyzerResult;
use crate::core::models::AnalysisResult;
use crate::core::risk;
use crate::core::tokenizer::tokenize;
use tracing::debug;

/// Analyzes a single query: tokenize, classify, then assess risk on the raw text.
///
/// The function is pure. It holds no state between calls and can be called
/// from any number of threads at once. Callers are expected to pass a trimmed,
/// non-empty query; an empty string simply yields an empty, low-risk result.
///
/// # Errors
///
/// Returns `AnalyzerError::MalformedInput` when the query has unbalanced
/// quoting. No partial result is produced in that case.
pub fn analyze(query: &str) -> AnalyzerResult<AnalysisResult> {
    let raw_tokens = tokenize(query)?;
    let classification = classify(&raw_tokens);

    // Risk patterns run on the unsplit query so phrases inside quotes still match.
    let risk_signals = risk::detect_signals(query);
    let risk_score = risk::score(risk_signals.len(), classification.unsupported_occurrences);

    debug!(
        tokens = classification.tokens.len(),
        unsupported = classification.unsupported_occurrences,
        score = risk_score,
        "Query analyzed."
    );

    Ok(AnalysisResult {
        original_query: query.to_string(),
        tokens: classification.tokens,
        operators: classification.operators,
        plain_terms: classification.plain_terms,
        unsupported_operators: classification.unsupported_operators,
        risk_signals,
        risk_score,
        recommendation: risk::recommendation(risk_score).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AnalyzerError;
    use crate::core::models::{Operator, RiskSignal, RiskTier, TokenKind};

    #[test]
    fn plain_operator_query_is_low_risk() {
        let result = analyze("site:example.com filetype:pdf annual report").unwrap();
        assert_eq!(result.operators.len(), 2);
        assert_eq!(result.operators[&Operator::Site], vec!["example.com"]);
        assert_eq!(result.operators[&Operator::Filetype], vec!["pdf"]);
        assert_eq!(result.plain_terms, vec!["annual", "report"]);
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.tier(), RiskTier::Low);
    }

    #[test]
    fn quoted_phrase_still_triggers_signals() {
        let result = analyze(r#"site:test.local "index of" .env password"#).unwrap();
        assert_eq!(
            result.risk_signals,
            vec![
                RiskSignal::CredentialKeyword,
                RiskSignal::DirectoryListing,
                RiskSignal::SensitiveFile,
            ]
        );
        assert_eq!(result.risk_score, 90);
        assert_eq!(
            result.recommendation,
            "High-risk query detected. Restrict execution and require manual approval."
        );
        assert_eq!(result.plain_terms, vec!["index of", ".env", "password"]);
    }

    #[test]
    fn repeated_unknown_operators_count_every_occurrence() {
        let result = analyze("foo:a foo:b FOO:c").unwrap();
        assert_eq!(result.unsupported_operators, vec!["foo"]);
        assert_eq!(result.count_kind(TokenKind::UnknownOperator), 3);
        assert_eq!(result.risk_score, 30);
        assert_eq!(result.tier(), RiskTier::Moderate);
    }

    #[test]
    fn malformed_query_returns_error() {
        let err = analyze(r#"site:example.com "unterminated"#).unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedInput { .. }));
    }

    #[test]
    fn original_query_is_kept_verbatim() {
        let query = "  intext:\"Budget 2024\"  ";
        let result = analyze(query).unwrap();
        assert_eq!(result.original_query, query);
        assert_eq!(result.operators[&Operator::Intext], vec!["Budget 2024"]);
    }
}
