use crate::config::{JSON_REPORT_FILE, MD_REPORT_FILE};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Raw report contents found in the reports directory.
#[derive(Debug, Default)]
pub struct ReportFiles {
    pub json: Option<String>,
    pub markdown: Option<String>,
}

/// Read whichever report files exist. A missing file is no data, not an
/// error; an unreadable file is logged and treated the same way.
pub fn read_reports(reports_dir: &Path) -> ReportFiles {
    ReportFiles {
        json: read_report(&reports_dir.join(JSON_REPORT_FILE)),
        markdown: read_report(&reports_dir.join(MD_REPORT_FILE)),
    }
}

fn read_report(path: &Path) -> Option<String> {
    if !path.exists() {
        debug!("No report at {:?}", path);
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Failed to read report {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_yields_nothing() {
        let reports = read_reports(Path::new("/nonexistent/reports"));
        assert!(reports.json.is_none());
        assert!(reports.markdown.is_none());
    }

    #[test]
    fn test_reads_present_reports() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(JSON_REPORT_FILE), "[]").unwrap();

        let reports = read_reports(dir.path());
        assert_eq!(reports.json.as_deref(), Some("[]"));
        assert!(reports.markdown.is_none());
    }
}
