// src/ui/widgets/mod.rs

// Module declarations for every widget drawn by `ui::render`.

pub mod analysis_view;    // Findings list, details pane and token breakdown.
pub mod disclaimer_popup; // Acceptable-use notice shown at startup.
pub mod footer;           // Key hints and export status.
pub mod input;            // The query input field.
pub mod log_view;         // Tail of the log file.
pub mod summary;          // Score gauge, tier and counts.
pub mod token_table;      // Classified tokens and operator table.
