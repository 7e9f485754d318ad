// src/core/tokenizer.rs

use crate::core::error::AnalyzerResult;
use tracing::trace;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Rewrites the query so `shell_words` keeps every word.
///
/// Outside quotes, a `#` that starts a word is escaped (a query has no
/// comments) and `\r` becomes a plain space. Quoted text and escaped
/// characters pass through untouched.
fn normalize(query: &str) -> String {
    let mut out = String::with_capacity(query.len() + 4);
    let mut quote = Quote::None;
    let mut at_word_start = true;
    let mut chars = query.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                }
                out.push(c);
            }
            Quote::Double => {
                out.push(c);
                match c {
                    '\\' => out.extend(chars.next()),
                    '"' => quote = Quote::None,
                    _ => {}
                }
            }
            Quote::None => {
                match c {
                    '\\' => {
                        out.push(c);
                        out.extend(chars.next());
                    }
                    '\'' => {
                        quote = Quote::Single;
                        out.push(c);
                    }
                    '"' => {
                        quote = Quote::Double;
                        out.push(c);
                    }
                    '#' if at_word_start => out.push_str("\\#"),
                    '\r' => out.push(' '),
                    _ => out.push(c),
                }
                at_word_start = matches!(c, ' ' | '\t' | '\n' | '\r');
            }
        }
    }
    out
}

/// Splits a query into words using POSIX shell quoting rules.
///
/// Quoted substrings become a single token with the quotes removed, and
/// backslash escapes are resolved. `#` is an ordinary character and `\r`
/// separates words like any other whitespace. Unbalanced quoting is reported
/// as `AnalyzerError::MalformedInput`.
pub fn tokenize(query: &str) -> AnalyzerResult<Vec<String>> {
    let words = shell_words::split(&normalize(query))?;
    trace!(count = words.len(), "Tokenized query.");
    Ok(words)
}
