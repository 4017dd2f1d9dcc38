use crate::cli::Cli;
use crate::config::{Dialect, COMMENT_FILE};
use crate::locate;
use crate::output;
use crate::parser::{self, Issue};
use tracing::{debug, info};

pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.reports_dir.join(COMMENT_FILE));

    let reports = locate::read_reports(&cli.reports_dir);

    let mut parsed: Option<(Vec<Issue>, Dialect)> = None;

    // JSON report wins when it is present, readable, and non-empty
    if let Some(raw) = reports.json.as_deref() {
        info!("Reading JSON report");
        match parser::parse_json_report(raw) {
            Some(issues) if !issues.is_empty() => {
                parsed = Some((issues, Dialect::Console));
            }
            Some(_) => debug!("JSON report contained no issues"),
            None => debug!("JSON report unreadable, falling back to markdown"),
        }
    }

    if parsed.is_none() {
        if let Some(raw) = reports.markdown.as_deref() {
            info!("Reading markdown report");
            let (issues, dialect) = parser::parse_markdown_report(raw, cli.dialect);
            if !issues.is_empty() {
                parsed = Some((issues, dialect));
            }
        }
    }

    let (issues, dialect) = parsed.unwrap_or((Vec::new(), Dialect::Console));
    info!("Formatting {} issues ({} dialect)", issues.len(), dialect);

    let comment = output::format_comment(issues, dialect);
    output::write_outputs(&cli.reports_dir, &output_path, &comment)?;
    info!("Wrote PR comment to {:?}", output_path);

    // Any issue, info included, fails the CI step
    if comment.has_errors {
        std::process::exit(1);
    }

    Ok(())
}
