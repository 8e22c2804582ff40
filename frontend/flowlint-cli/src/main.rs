mod cli;
mod renderer;

use std::path::Path;

fn main() {
    flowlint_core::logging::init_tracing("warn");
    let args = cli::Cli::parse_args();

    let mut stdout = std::io::stdout();
    let code = run(Path::new(&args.flow), &mut stdout);
    std::process::exit(code);
}

/// Loads, validates, and renders one flow document. Returns the process exit
/// code: zero only when the document decoded and no issue was found.
fn run<W: std::io::Write>(flow_path: &Path, out: &mut W) -> i32 {
    let outcome = flowlint_core::load_from_file(flow_path)
        .map(|document| flowlint_core::validate_flow(&document));

    if let Err(err) = renderer::render_report(out, &outcome) {
        eprintln!("flowlint-cli failed writing report: {err}");
        return 1;
    }

    match &outcome {
        Ok(issues) if issues.is_empty() => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::io::Write;

    fn flow_file(raw: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{raw}").expect("write temp file");
        file
    }

    fn run_captured(raw: &str) -> (i32, String) {
        let file = flow_file(raw);
        let mut buffer = Vec::new();
        let code = run(file.path(), &mut buffer);
        (code, String::from_utf8(buffer).expect("report is utf-8"))
    }

    #[test]
    fn clean_flow_exits_zero() {
        let (code, report) = run_captured(
            r#"{"initial_state":"A","states":[{"name":"A","transitions":[{"next":"B"}]},{"name":"B"}]}"#,
        );
        assert_eq!(code, 0);
        assert_eq!(report, "ALEX_SYNTAX_OK\nISSUE_COUNT 0\n");
    }

    #[test]
    fn empty_document_reports_missing_initial_state() {
        let (code, report) = run_captured("{}");
        assert_eq!(code, 1);
        assert_eq!(
            report,
            "ALEX_SYNTAX_OK\n\
             ISSUE_COUNT 1\n\
             ISSUE initial_state '' not found in states\n"
        );
    }

    #[test]
    fn broken_json_reports_syntax_error_and_nothing_else() {
        let (code, report) = run_captured("{");
        assert_eq!(code, 1);
        assert!(report.starts_with("ALEX_SYNTAX_ERR "));
        assert_eq!(report.lines().count(), 1);
    }

    #[test]
    fn dangling_transition_is_the_only_issue() {
        let (code, report) = run_captured(
            r#"{"initial_state":"A","states":[{"name":"A","transitions":[{"next":"C"}]},{"name":"B"}]}"#,
        );
        assert_eq!(code, 1);
        assert_eq!(
            report,
            "ALEX_SYNTAX_OK\n\
             ISSUE_COUNT 1\n\
             ISSUE transition from 'A' points to missing state 'C'\n"
        );
    }
}
