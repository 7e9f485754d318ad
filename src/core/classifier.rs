// src/core/classifier.rs

use crate::core::models::{Operator, OperatorTable, Token, TokenKind};
use std::str::FromStr;
use tracing::trace;

/// Tokens sorted into operators, unknown operators and plain terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub tokens: Vec<Token>,
    pub operators: OperatorTable,
    pub plain_terms: Vec<String>,
    /// Lowercased unknown operator names, deduplicated and sorted.
    pub unsupported_operators: Vec<String>,
    /// Every unknown operator token seen, repeats included.
    pub unsupported_occurrences: usize,
}

/// Splits a `name:operand` token on its first colon.
///
/// Tokens without a colon, and tokens that still start with a double quote,
/// are not operator candidates.
fn split_operator(token: &str) -> Option<(&str, &str)> {
    if token.starts_with('"') {
        return None;
    }
    token.split_once(':')
}

/// Classifies each token in order. Operates on tokens only; the raw query is
/// not consulted here.
pub fn classify<S: AsRef<str>>(raw_tokens: &[S]) -> Classification {
    let mut result = Classification::default();
    let mut unsupported: Vec<String> = Vec::new();

    for raw in raw_tokens {
        let token = raw.as_ref();
        match split_operator(token) {
            Some((name, operand)) => {
                let name = name.to_lowercase();
                match Operator::from_str(&name) {
                    Ok(op) => {
                        trace!(operator = %op, operand, "Recognized operator.");
                        result.operators.entry(op).or_default().push(operand.to_string());
                        result.tokens.push(Token::new(TokenKind::Operator, token));
                    }
                    Err(_) => {
                        trace!(operator = %name, "Unsupported operator.");
                        unsupported.push(name);
                        result.tokens.push(Token::new(TokenKind::UnknownOperator, token));
                    }
                }
            }
            None => {
                result.plain_terms.push(token.to_string());
                result.tokens.push(Token::new(TokenKind::Term, token));
            }
        }
    }

    result.unsupported_occurrences = unsupported.len();
    unsupported.sort();
    unsupported.dedup();
    result.unsupported_operators = unsupported;
    result
}
