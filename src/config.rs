use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::edit::EditRule;
use crate::error::FixError;

/// Source document both utilities read by default
pub const DEFAULT_INPUT: &str = "src/pages/social/SocialFeedPage.tsx.original";

/// Where `drop-line` writes by default
pub const DROP_LINE_OUTPUT: &str = "src/pages/social/SocialFeedPage.tsx.fixed";

/// Line `drop-line` removes by default (1-based)
pub const DROP_LINE_NUMBER: usize = 2700;

/// Where `replace-literal` writes by default
pub const REPLACE_OUTPUT: &str = "src/pages/social/SocialFeedPage.tsx.fixed2";

/// Dangling closing paren left after a ternary's `null` branch
pub const REPLACE_PATTERN: &str = ") : null\n          )";

pub const REPLACE_WITH: &str = ") : null";

/// Confirmation printed on success
pub const SUCCESS_MESSAGE: &str = "File fixed successfully!";

/// Everything one run needs: where to read, where to write, what to change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rule: EditRule,
    /// When set, the source must hash to this BLAKE3 checksum
    pub expected_checksum: Option<String>,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, rule: EditRule) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            rule,
            expected_checksum: None,
        }
    }

    pub fn with_expected_checksum(mut self, checksum: Option<String>) -> Self {
        self.expected_checksum = checksum;
        self
    }

    /// Replace the default input/output paths with any that were given
    pub fn with_paths(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// Line deletion over the default paths
    pub fn drop_line(line: NonZeroUsize) -> Self {
        Self::new(DEFAULT_INPUT, DROP_LINE_OUTPUT, EditRule::delete_line(line))
    }

    /// Literal replacement over the default paths
    pub fn replace(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self, FixError> {
        let rule = EditRule::replace_literal(pattern, replacement)?;
        Ok(Self::new(DEFAULT_INPUT, REPLACE_OUTPUT, rule))
    }
}

/// [`DROP_LINE_NUMBER`] as a line number
pub fn default_line() -> NonZeroUsize {
    NonZeroUsize::new(DROP_LINE_NUMBER).unwrap_or(NonZeroUsize::MIN)
}

/// Expand `\n`, `\r`, `\t` and `\\` so multi-line literals fit on a command line
///
/// Unknown escapes are kept verbatim.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jobs_write_distinct_outputs() {
        let drop = Job::drop_line(default_line());
        let replace = Job::replace(REPLACE_PATTERN, REPLACE_WITH).unwrap();

        assert_eq!(drop.input, replace.input);
        assert_ne!(drop.output, replace.output);
        assert_ne!(drop.input, drop.output);
        assert_eq!(drop.rule.to_string(), "delete line 2700");
        assert!(drop.expected_checksum.is_none());
    }

    #[test]
    fn test_path_overrides_keep_the_rule() {
        let job = Job::drop_line(default_line()).with_paths(None, Some(PathBuf::from("out.txt")));

        assert_eq!(job.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(job.output, PathBuf::from("out.txt"));
        assert_eq!(job.rule, EditRule::delete_line(default_line()));
    }

    #[test]
    fn test_replace_job_rejects_empty_pattern() {
        assert!(matches!(Job::replace("", "x"), Err(FixError::EmptyPattern)));

        let job = Job::replace("a", "b").unwrap();
        assert_eq!(job.output, PathBuf::from(REPLACE_OUTPUT));
    }

    #[test]
    fn test_default_pattern_spans_two_lines() {
        assert_eq!(REPLACE_PATTERN.matches('\n').count(), 1);
        assert!(REPLACE_PATTERN.starts_with(REPLACE_WITH));
        assert!(REPLACE_PATTERN.ends_with("          )"));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r") : null\n          )"), REPLACE_PATTERN);
        assert_eq!(unescape(r"a\tb\\c"), "a\tb\\c");
        assert_eq!(unescape(r"keep \q and trailing \"), "keep \\q and trailing \\");
        assert_eq!(unescape("plain"), "plain");
    }
}
