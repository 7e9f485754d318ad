//! Defensive analysis of search-engine "dork" queries.
//!
//! [`analyze`] tokenizes a query, classifies its operators and scans it for
//! patterns associated with information-disclosure reconnaissance. The
//! resulting [`AnalysisResult`] carries a bounded risk score and a
//! recommendation that callers can use to gate or review the query.
//!
//! ```
//! let result = dorkguard::analyze("site:example.com filetype:pdf annual report").unwrap();
//! assert_eq!(result.risk_score, 0);
//! println!("{}", dorkguard::serialize(&result).unwrap());
//! ```

pub mod core;

pub use crate::core::models::{AnalysisResult, Operator, RiskSignal, RiskTier, Token, TokenKind};
pub use crate::core::{AnalyzerError, AnalyzerResult, analyze, serialize, serialize_compact};
