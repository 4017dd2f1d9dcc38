mod comment;

pub use comment::{format_comment, group_by_file, PrComment, SeverityCounts, NO_ISSUES_MARKDOWN};

use crate::config::SUMMARY_FILE;
use crate::error::OutputError;
use std::fs;
use std::path::Path;

/// Write the PR comment markdown and the errors.json summary.
pub fn write_outputs(
    reports_dir: &Path,
    output_path: &Path,
    comment: &PrComment,
) -> Result<(), OutputError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
        }
    }
    fs::write(output_path, &comment.markdown).map_err(OutputError::WriteReport)?;

    // The summary JSON always lands next to the input reports
    fs::create_dir_all(reports_dir).map_err(OutputError::CreateDir)?;
    let json = serde_json::to_string_pretty(comment)?;
    fs::write(reports_dir.join(SUMMARY_FILE), json).map_err(OutputError::WriteReport)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dialect;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");
        let output_path = dir.path().join("out/nested/pr-comment.md");

        let comment = format_comment(Vec::new(), Dialect::Console);
        write_outputs(&reports_dir, &output_path, &comment).unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), NO_ISSUES_MARKDOWN);
        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(reports_dir.join(SUMMARY_FILE)).unwrap())
                .unwrap();
        assert_eq!(summary["hasErrors"], false);
        assert_eq!(summary["markdown"], NO_ISSUES_MARKDOWN);
    }
}
