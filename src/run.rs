use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Job;
use crate::edit::{apply_rule, EditResult};
use crate::error::FixError;
use crate::file::{read_file, write_file};
use crate::json::{generate_execution_id, RunReport};
use crate::position::{byte_to_position, line_count};

/// True when both paths name the same file on disk
fn resolves_to_same(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Read the job's source, apply its rule, write the output document
///
/// The output is written even when the rule changes nothing. The source
/// document is never written to.
pub fn run(job: &Job) -> Result<RunReport, FixError> {
    let execution_id = generate_execution_id();
    info!(%execution_id, input = %job.input.display(), output = %job.output.display(), rule = %job.rule, "starting run");

    if resolves_to_same(&job.input, &job.output) {
        return Err(FixError::SameInputOutput {
            path: job.output.display().to_string(),
        });
    }

    let source = read_file(&job.input)?;

    if let Some(expected) = &job.expected_checksum {
        if *expected != source.checksum {
            return Err(FixError::ChecksumMismatch {
                expected: expected.clone(),
                actual: source.checksum,
            });
        }
        debug!("source checksum verified");
    }

    let outcome = apply_rule(&source.content, &job.rule);
    match &outcome.result {
        EditResult::Applied { changes, byte_shift } => {
            info!(changes, byte_shift, "rule applied");
        }
        EditResult::Unchanged { reason } => {
            info!(%reason, "rule did not match, writing source unchanged");
        }
    }

    let change_positions = outcome
        .offsets
        .iter()
        .map(|&offset| byte_to_position(&source.content, offset))
        .collect();

    let output_checksum = write_file(&job.output, &outcome.content)?;

    let (status, changes, byte_shift, reason) = RunReport::status_fields(&outcome.result);
    Ok(RunReport {
        execution_id,
        input: source.path,
        output: job.output.display().to_string(),
        rule: job.rule.clone(),
        status,
        changes,
        byte_shift,
        reason,
        lines_before: line_count(&source.content),
        lines_after: line_count(&outcome.content),
        source_checksum: source.checksum,
        output_checksum,
        change_positions,
    })
}
