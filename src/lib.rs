// Error type
pub mod error;

// File read/write module
pub mod file;

// Line and byte position helpers
pub mod position;

// Edit rules module
pub mod edit;

// Defaults and job description
pub mod config;

// Read -> transform -> write pipeline
pub mod run;

// JSON report module
pub mod json;

// Logging setup
pub mod logging;

// Re-exports
pub use config::Job;
pub use edit::{EditOutcome, EditResult, EditRule, apply_rule, delete_line, match_offsets, replace_literal};
pub use error::FixError;
pub use file::{FileContent, checksum, normalize_newlines, read_file, write_file};
pub use json::{RunReport, generate_execution_id};
pub use position::{Position, Span, byte_to_position, line_count, line_span, lines};
pub use run::run;
