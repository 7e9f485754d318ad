// src/cli.rs

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use dorkguard::core::models::Operator;
use dorkguard::core::{analyze, serialize, serialize_compact, AnalyzerError};
use std::process::ExitCode;
use strum::IntoEnumIterator;
use tracing::{info, warn};

pub const USAGE: &str = "Usage: dorkguard analyze <query>";

#[derive(Parser)]
#[command(name = "dorkguard")]
#[command(version)]
#[command(about = "Flags risky search-engine dork queries before they are run")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive terminal interface (default)
    Tui,

    /// Analyze a query and print the result as JSON
    Analyze {
        /// Query words; they are joined with single spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,

        /// Wrap the JSON in a ```json fence for chat-style output
        #[arg(long)]
        markdown: bool,

        /// Print the JSON on a single line
        #[arg(long, conflicts_with = "markdown")]
        compact: bool,
    },

    /// Describe what the tool does and list its commands
    Guide,
}

pub fn format_help() -> String {
    let operators: Vec<String> = Operator::iter().map(|op| op.to_string()).collect();
    format!(
        "Send any search-style query and dorkguard will analyze its risk signals.\n\n\
         Commands:\n\
         \x20 dorkguard                 - open the interactive interface\n\
         \x20 dorkguard guide           - show this help\n\
         \x20 dorkguard analyze <query> - parse a query and print the JSON result\n\n\
         Supported operators: {}",
        operators.join(", ")
    )
}

/// Wraps a serialized document in a Markdown code fence.
pub fn markdown_fence(document: &str) -> String {
    format!("```json\n{}\n```", document)
}

/// Joins command-line words into a query. `None` when nothing but whitespace is left.
pub fn query_from_words(words: &[String]) -> Option<String> {
    let query = words.join(" ").trim().to_string();
    (!query.is_empty()).then_some(query)
}

/// Runs `dorkguard analyze`, printing either the result or a user-facing message.
pub fn run_analyze(words: &[String], markdown: bool, compact: bool) -> Result<ExitCode> {
    let Some(query) = query_from_words(words) else {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::from(2));
    };

    let result = match analyze(&query) {
        Ok(result) => result,
        Err(e @ AnalyzerError::MalformedInput { .. }) => {
            warn!(error = %e, "Rejected malformed query.");
            eprintln!("Could not parse the query: {}. Check that every quote is closed.", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    info!(score = result.risk_score, "Query analyzed from the command line.");

    let document = if compact { serialize_compact(&result)? } else { serialize(&result)? };
    if markdown {
        println!("{}", markdown_fence(&document));
    } else {
        println!("{}", document);
    }
    Ok(ExitCode::SUCCESS)
}
