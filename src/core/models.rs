// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};

// --- Core Data Models ---

/// Severity level attached to a finding in the knowledge base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// The closed set of search operators the classifier recognizes.
///
/// Variants are declared alphabetically so that an `OperatorTable` iterates
/// (and serializes) its keys in lexicographic order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    Cache,
    Ext,
    Filetype,
    Intext,
    Intitle,
    Inurl,
    Site,
}

/// How a single token was classified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    Operator,
    UnknownOperator,
    Term,
}

/// A classified token. `value` is the token text exactly as the tokenizer produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}

/// Operands collected per recognized operator, in order of appearance.
/// Only operators with at least one operand are present.
pub type OperatorTable = BTreeMap<Operator, Vec<String>>;

/// Identifiers of the content patterns the risk assessor looks for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskSignal {
    CredentialKeyword,
    SensitiveFile,
    DirectoryListing,
}

/// Recommendation tier derived from the risk score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum RiskTier {
    #[default]
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Picks the tier for a score. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u8) -> Self {
        match score {
            60.. => RiskTier::High,
            30..=59 => RiskTier::Moderate,
            _ => RiskTier::Low,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskTier::High => {
                "High-risk query detected. Restrict execution and require manual approval."
            }
            RiskTier::Moderate => {
                "Moderate risk. Log and review before use in automated workflows."
            }
            RiskTier::Low => "Low risk for defensive/research usage.",
        }
    }
}

// --- Main Report ---

/// The complete outcome of analyzing one query.
///
/// Field order here is the field order of the serialized document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub original_query: String,
    pub tokens: Vec<Token>,
    pub operators: OperatorTable,
    pub plain_terms: Vec<String>,
    pub unsupported_operators: Vec<String>,
    pub risk_signals: Vec<RiskSignal>,
    pub risk_score: u8,
    pub recommendation: String,
}

impl AnalysisResult {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.risk_score)
    }

    /// Number of tokens carrying the given kind.
    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn operator_parses_lowercase_names() {
        assert_eq!(Operator::from_str("site").unwrap(), Operator::Site);
        assert_eq!(Operator::from_str("filetype").unwrap(), Operator::Filetype);
        assert!(Operator::from_str("foo").is_err());
    }

    #[test]
    fn operator_table_iterates_alphabetically() {
        let mut table = OperatorTable::new();
        table.insert(Operator::Site, vec!["a".into()]);
        table.insert(Operator::Cache, vec!["b".into()]);
        table.insert(Operator::Intitle, vec!["c".into()]);
        let keys: Vec<&str> = table.keys().map(|k| k.as_ref()).collect();
        assert_eq!(keys, vec!["cache", "intitle", "site"]);
    }

    #[test]
    fn tier_thresholds_are_inclusive() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(29), RiskTier::Low);
        assert_eq!(RiskTier::from_score(30), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(59), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(60), RiskTier::High);
        assert_eq!(RiskTier::from_score(100), RiskTier::High);
    }

    #[test]
    fn token_kind_names_match_wire_format() {
        assert_eq!(TokenKind::UnknownOperator.as_ref(), "unknown_operator");
        assert_eq!(RiskSignal::DirectoryListing.as_ref(), "directory_listing");
    }
}
