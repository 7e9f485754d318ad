// src/core/mod.rs

// The `core` module is the analysis engine: it turns a raw query into an
// `AnalysisResult` and knows nothing about terminals or transports.

/// Data structures shared by every stage, such as `Token`, `Operator`,
/// `RiskSignal` and the final `AnalysisResult`.
pub mod models;

/// Error type returned by the engine.
pub mod error;

/// Shell-style word splitting of the raw query.
pub mod tokenizer;

/// Sorts tokens into operators, unknown operators and plain terms.
pub mod classifier;

/// Pattern table, score and recommendation.
pub mod risk;

/// The `analyze` entry point tying the stages together.
pub mod analyzer;

/// JSON rendering of results for callers.
pub mod serializer;

/// Human-readable explanations for each finding.
pub mod knowledge_base;

pub use analyzer::analyze;
pub use error::{AnalyzerError, AnalyzerResult};
pub use serializer::{serialize, serialize_compact};
