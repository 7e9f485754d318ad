// src/core/serializer.rs

use crate::core::error::AnalyzerResult;
use crate::core::models::AnalysisResult;

/// Renders a result as an indented JSON document.
///
/// Fields appear in declaration order of `AnalysisResult`; the score stays a number.
pub fn serialize(result: &AnalysisResult) -> AnalyzerResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Single-line variant of [`serialize`], for log lines and line-oriented consumers.
pub fn serialize_compact(result: &AnalysisResult) -> AnalyzerResult<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyze;
    use serde_json::{Value, json};

    #[test]
    fn document_has_expected_fields_in_order() {
        let result = analyze("intitle:dashboard foo:bar secret").unwrap();
        let text = serialize(&result).unwrap();

        let keys = [
            "\"original_query\"",
            "\"tokens\"",
            "\"operators\"",
            "\"plain_terms\"",
            "\"unsupported_operators\"",
            "\"risk_signals\"",
            "\"risk_score\"",
            "\"recommendation\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.starts_with("{\n  \"original_query\""));
    }

    #[test]
    fn document_content_matches_result() {
        let result = analyze("intitle:dashboard foo:bar secret").unwrap();
        let value: Value = serde_json::from_str(&serialize(&result).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "original_query": "intitle:dashboard foo:bar secret",
                "tokens": [
                    {"kind": "operator", "value": "intitle:dashboard"},
                    {"kind": "unknown_operator", "value": "foo:bar"},
                    {"kind": "term", "value": "secret"}
                ],
                "operators": {"intitle": ["dashboard"]},
                "plain_terms": ["secret"],
                "unsupported_operators": ["foo"],
                "risk_signals": ["credential_keyword"],
                "risk_score": 40,
                "recommendation": "Moderate risk. Log and review before use in automated workflows."
            })
        );
    }

    #[test]
    fn operator_keys_are_sorted() {
        let result = analyze("site:a.com inurl:admin cache:b.com").unwrap();
        let text = serialize_compact(&result).unwrap();
        assert!(text.contains(r#""operators":{"cache":["b.com"],"inurl":["admin"],"site":["a.com"]}"#));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn document_deserializes_back_into_a_result() {
        let result = analyze("ext:sql \"index of\"").unwrap();
        let text = serialize(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, result);
    }
}
