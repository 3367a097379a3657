use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::error::FixError;
use crate::position::{line_count, line_span};

/// A fixed transformation applied to a source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditRule {
    /// Remove the line at a 1-based position, terminator included
    DeleteLine { line: NonZeroUsize },
    /// Replace every non-overlapping occurrence of `pattern`, left to right
    ReplaceLiteral { pattern: String, replacement: String },
}

impl EditRule {
    pub fn delete_line(line: NonZeroUsize) -> Self {
        EditRule::DeleteLine { line }
    }

    /// Build a literal replacement rule, rejecting an empty pattern
    pub fn replace_literal(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, FixError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(FixError::EmptyPattern);
        }
        Ok(EditRule::ReplaceLiteral {
            pattern,
            replacement: replacement.into(),
        })
    }
}

impl fmt::Display for EditRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditRule::DeleteLine { line } => write!(f, "delete line {}", line),
            EditRule::ReplaceLiteral { pattern, replacement } => {
                write!(f, "replace {:?} with {:?}", pattern, replacement)
            }
        }
    }
}

/// Result of applying an edit rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResult {
    /// The rule matched and the content changed
    Applied {
        /// Number of lines removed or occurrences replaced
        changes: usize,
        /// Byte offset shift (positive = content grew, negative = shrank)
        byte_shift: i64,
    },
    /// The rule did not match; output equals input
    Unchanged {
        /// Why nothing was changed
        reason: String,
    },
}

/// Transformed content together with what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub content: String,
    pub result: EditResult,
    /// Source byte offsets where each change begins
    pub offsets: Vec<usize>,
}

impl EditOutcome {
    fn unchanged(content: &str, reason: String) -> Self {
        Self {
            content: content.to_string(),
            result: EditResult::Unchanged { reason },
            offsets: Vec::new(),
        }
    }
}

/// Apply `rule` to `content`
pub fn apply_rule(content: &str, rule: &EditRule) -> EditOutcome {
    match rule {
        EditRule::DeleteLine { line } => delete_line(content, *line),
        EditRule::ReplaceLiteral { pattern, replacement } => {
            replace_literal(content, pattern, replacement)
        }
    }
}

/// Remove the 1-based `line` from `content`
///
/// Lines end at `\n`; callers normalize other line endings first. Every
/// other line keeps its bytes and its order. A document with fewer than
/// `line` lines comes back unchanged.
pub fn delete_line(content: &str, line: NonZeroUsize) -> EditOutcome {
    let Some(span) = line_span(content, line) else {
        return EditOutcome::unchanged(
            content,
            format!(
                "document has {} line(s), line {} not present",
                line_count(content),
                line
            ),
        );
    };

    let removed = span.byte_end - span.byte_start;
    let mut edited = String::with_capacity(content.len() - removed);
    edited.push_str(&content[..span.byte_start]);
    edited.push_str(&content[span.byte_end..]);

    EditOutcome {
        content: edited,
        result: EditResult::Applied {
            changes: 1,
            byte_shift: -(removed as i64),
        },
        offsets: vec![span.byte_start],
    }
}

/// Byte offsets of the non-overlapping occurrences of `pattern`, left to right
///
/// An empty pattern has no occurrences.
pub fn match_offsets(content: &str, pattern: &str) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }
    content.match_indices(pattern).map(|(offset, _)| offset).collect()
}

/// Replace every non-overlapping occurrence of `pattern` with `replacement`
///
/// Matching is literal and greedy from the left. Content without an
/// occurrence comes back unchanged.
pub fn replace_literal(content: &str, pattern: &str, replacement: &str) -> EditOutcome {
    if pattern.is_empty() {
        return EditOutcome::unchanged(content, "empty pattern".to_string());
    }

    let offsets = match_offsets(content, pattern);
    if offsets.is_empty() {
        return EditOutcome::unchanged(content, "pattern not found".to_string());
    }

    let changes = offsets.len();
    let per_match = replacement.len() as i64 - pattern.len() as i64;
    EditOutcome {
        content: content.replace(pattern, replacement),
        result: EditResult::Applied {
            changes,
            byte_shift: per_match * changes as i64,
        },
        offsets,
    }
}
