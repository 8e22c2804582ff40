use flowlint_core::{Error, Issue};
use std::io::Write;

/// Writes the line-oriented lint report.
///
/// A decode failure yields a single `ALEX_SYNTAX_ERR` line and nothing else.
/// A decoded document yields `ALEX_SYNTAX_OK`, the issue count, then one
/// `ISSUE` line per defect in validator order. Downstream tooling parses
/// these tokens, so the format is load-bearing.
pub fn render_report<W: Write>(
    out: &mut W,
    outcome: &Result<Vec<Issue>, Error>,
) -> std::io::Result<()> {
    match outcome {
        Err(error) => {
            writeln!(out, "ALEX_SYNTAX_ERR {error}")?;
        }
        Ok(issues) => {
            writeln!(out, "ALEX_SYNTAX_OK")?;
            writeln!(out, "ISSUE_COUNT {}", issues.len())?;
            for issue in issues {
                writeln!(out, "ISSUE {issue}")?;
            }
        }
    }
    Ok(())
}
