use serde::Serialize;

use crate::edit::{EditResult, EditRule};
use crate::position::Position;

/// Structured summary of one run, printed with `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub execution_id: String,
    pub input: String,
    pub output: String,
    pub rule: EditRule,
    /// "applied" or "unchanged"
    pub status: String,
    pub changes: usize,
    pub byte_shift: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub source_checksum: String,
    pub output_checksum: String,
    pub lines_before: usize,
    pub lines_after: usize,
    /// Where each deleted line or replaced occurrence started in the source
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub change_positions: Vec<Position>,
}

impl RunReport {
    pub fn status_fields(result: &EditResult) -> (String, usize, i64, Option<String>) {
        match result {
            EditResult::Applied { changes, byte_shift } => {
                ("applied".to_string(), *changes, *byte_shift, None)
            }
            EditResult::Unchanged { reason } => {
                ("unchanged".to_string(), 0, 0, Some(reason.clone()))
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| r#"{"error": "Failed to serialize report"}"#.to_string())
    }
}

/// Console text for a finished run: the report as JSON, or the fixed success line
pub fn render(report: &RunReport, json_mode: bool) -> String {
    if json_mode {
        report.to_json()
    } else {
        crate::config::SUCCESS_MESSAGE.to_string()
    }
}

/// Fresh identifier for a run
pub fn generate_execution_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
