use dorkguard::{analyze, serialize, AnalyzerError, Operator, RiskSignal, RiskTier, TokenKind};

const HIGH_RISK: &str = "High-risk query detected. Restrict execution and require manual approval.";
const LOW_RISK: &str = "Low risk for defensive/research usage.";

#[test]
fn operators_and_terms_are_separated() {
    let result = analyze("site:example.com filetype:pdf annual report").unwrap();

    assert_eq!(result.operators.len(), 2);
    assert_eq!(result.operators[&Operator::Site], vec!["example.com"]);
    assert_eq!(result.operators[&Operator::Filetype], vec!["pdf"]);
    assert_eq!(result.plain_terms, vec!["annual", "report"]);
    assert!(result.unsupported_operators.is_empty());
    assert!(result.risk_signals.is_empty());
    assert_eq!(result.risk_score, 0);
    assert_eq!(result.recommendation, LOW_RISK);
}

#[test]
fn reconnaissance_query_is_high_risk() {
    let result = analyze(r#"site:test.local "index of" .env password"#).unwrap();

    for signal in [
        RiskSignal::DirectoryListing,
        RiskSignal::SensitiveFile,
        RiskSignal::CredentialKeyword,
    ] {
        assert!(result.risk_signals.contains(&signal), "missing {signal}");
    }
    assert!(result.risk_score >= 60);
    assert_eq!(result.tier(), RiskTier::High);
    assert_eq!(result.recommendation, HIGH_RISK);
}

#[test]
fn unknown_operator_is_reported() {
    let result = analyze("foo:bar intitle:dashboard").unwrap();

    assert_eq!(result.unsupported_operators, vec!["foo"]);
    assert!(result.operators.contains_key(&Operator::Intitle));
    assert_eq!(result.risk_score, 10);
}

#[test]
fn unterminated_quote_is_an_error() {
    let err = analyze(r#"site:example.com "unterminated"#).unwrap_err();
    assert!(matches!(err, AnalyzerError::MalformedInput { .. }));
    assert!(err.to_string().starts_with("malformed query"));
}

#[test]
fn operator_case_is_ignored_but_operand_case_is_kept() {
    let upper = analyze("SITE:Example.com").unwrap();
    let lower = analyze("site:Example.com").unwrap();

    assert_eq!(upper.operators, lower.operators);
    assert_eq!(upper.operators[&Operator::Site], vec!["Example.com"]);
    assert_eq!(upper.tokens[0].kind, TokenKind::Operator);
    assert_eq!(upper.tokens[0].value, "SITE:Example.com");
}

#[test]
fn score_counts_every_unknown_operator_occurrence() {
    // Two distinct names, five occurrences, plus one signal.
    let result = analyze("a:1 b:2 a:3 A:4 b:5 token").unwrap();

    assert_eq!(result.unsupported_operators, vec!["a", "b"]);
    assert_eq!(result.risk_signals, vec![RiskSignal::CredentialKeyword]);
    assert_eq!(result.risk_score, 80);
}

#[test]
fn score_is_capped_at_one_hundred() {
    let result = analyze("x:1 y:2 z:3 secret id_rsa \"index  of\"").unwrap();
    assert_eq!(result.risk_score, 100);
}

#[test]
fn serialized_document_is_indented_json() {
    let result = analyze("inurl:admin").unwrap();
    let text = serialize(&result).unwrap();

    assert!(text.contains("\n  \"tokens\": ["));
    assert!(text.contains("\"kind\": \"operator\""));
    assert!(text.contains("\"risk_score\": 0,"));
}

#[test]
fn hash_prefixed_words_are_not_dropped() {
    let result = analyze("intitle:admin #foo:bar password").unwrap();

    assert_eq!(result.tokens.len(), 3);
    assert_eq!(result.tokens[1].kind, TokenKind::UnknownOperator);
    assert_eq!(result.tokens[1].value, "#foo:bar");
    assert_eq!(result.unsupported_operators, vec!["#foo"]);
    assert_eq!(result.plain_terms, vec!["password"]);
    assert_eq!(result.risk_score, 40);
}

#[test]
fn carriage_return_separates_tokens() {
    let result = analyze("site:a.com\rreport").unwrap();

    let values: Vec<&str> = result.tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["site:a.com", "report"]);
    assert_eq!(result.operators[&Operator::Site], vec!["a.com"]);
}
