mod console;
mod heading;
mod issue;
mod json;
mod rule;

pub use issue::{Issue, Severity};

use crate::config::Dialect;

/// Parse issues from the JSON report.
///
/// `None` means the report was unreadable and the caller should fall back to
/// the markdown path; a legitimately empty report is `Some(vec![])`.
pub fn parse_json_report(raw: &str) -> Option<Vec<Issue>> {
    json::try_parse_json(raw)
}

/// Parse issues from the markdown report.
///
/// With an explicit dialect only that extractor runs; otherwise the console
/// dialect is tried first and the heading dialect used when it finds nothing.
/// The winning dialect is returned so the formatter can pick matching table
/// columns.
pub fn parse_markdown_report(raw: &str, dialect: Option<Dialect>) -> (Vec<Issue>, Dialect) {
    match dialect {
        Some(Dialect::Console) => (console::parse(raw), Dialect::Console),
        Some(Dialect::Heading) => (heading::parse(raw), Dialect::Heading),
        None => {
            let issues = console::parse(raw);
            if !issues.is_empty() {
                return (issues, Dialect::Console);
            }

            let issues = heading::parse(raw);
            if !issues.is_empty() {
                return (issues, Dialect::Heading);
            }

            tracing::debug!("No issues found in markdown report under either dialect");
            (Vec::new(), Dialect::Console)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_fallback_order() {
        let console_md = "[ERROR] raw-values: hardcoded color\n";
        let (issues, dialect) = parse_markdown_report(console_md, None);
        assert_eq!(issues.len(), 1);
        assert_eq!(dialect, Dialect::Console);

        let heading_md = "## src/a.tsx\n- Error: bad value\n";
        let (issues, dialect) = parse_markdown_report(heading_md, None);
        assert_eq!(issues.len(), 1);
        assert_eq!(dialect, Dialect::Heading);
    }

    #[test]
    fn test_explicit_dialect_is_not_overridden() {
        let heading_md = "## src/a.tsx\n- Error: bad value\n";
        let (issues, dialect) = parse_markdown_report(heading_md, Some(Dialect::Console));
        assert!(issues.is_empty());
        assert_eq!(dialect, Dialect::Console);
    }

    #[test]
    fn test_empty_markdown_yields_empty() {
        let (issues, dialect) = parse_markdown_report("nothing here\n", None);
        assert!(issues.is_empty());
        assert_eq!(dialect, Dialect::Console);
    }
}
