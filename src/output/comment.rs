use crate::config::{Dialect, DEFAULT_FILE, MAX_MESSAGE_LEN};
use crate::parser::{Issue, Severity};
use serde::Serialize;

pub const NO_ISSUES_MARKDOWN: &str =
    "## ✅ Design AI Linter Report\n\nエラーと警告は検出されませんでした。";

/// Everything one run produces: the rendered PR comment plus the
/// machine-readable summary written to errors.json.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrComment {
    pub has_errors: bool,
    pub markdown: String,
    pub errors: Vec<Issue>,
    pub summary: SeverityCounts,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    fn tally(issues: &[Issue]) -> Self {
        let mut counts = SeverityCounts::default();
        for issue in issues {
            match issue.severity {
                Severity::Error => counts.error += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }

    fn any(&self) -> bool {
        self.error > 0 || self.warning > 0 || self.info > 0
    }
}

/// Group issues by file, preserving input order within and across groups.
pub fn group_by_file(issues: &[Issue]) -> Vec<(String, Vec<&Issue>)> {
    let mut groups: Vec<(String, Vec<&Issue>)> = Vec::new();

    for issue in issues {
        let file = if issue.file.is_empty() {
            DEFAULT_FILE
        } else {
            issue.file.as_str()
        };
        match groups.iter_mut().find(|(name, _)| name.as_str() == file) {
            Some((_, members)) => members.push(issue),
            None => groups.push((file.to_string(), vec![issue])),
        }
    }

    groups
}

/// Render issues into the PR comment markdown plus summary counts.
///
/// `has_errors` is true for any nonzero count, info included; it drives the
/// process exit code.
pub fn format_comment(issues: Vec<Issue>, dialect: Dialect) -> PrComment {
    if issues.is_empty() {
        return PrComment {
            has_errors: false,
            markdown: NO_ISSUES_MARKDOWN.to_string(),
            errors: issues,
            summary: SeverityCounts::default(),
        };
    }

    let summary = SeverityCounts::tally(&issues);
    let mut markdown = String::from("## 🔍 Design AI Linter Report\n\n");

    markdown.push_str("### サマリー\n\n");
    markdown.push_str(&format!("- ❌ **エラー**: {}件\n", summary.error));
    markdown.push_str(&format!("- ⚠️ **警告**: {}件\n", summary.warning));
    markdown.push_str(&format!("- ℹ️ **情報**: {}件\n\n", summary.info));

    markdown.push_str("### 検出された問題\n\n");

    for (file, members) in group_by_file(&issues) {
        markdown.push_str(&format!("#### `{}`\n\n", file));

        match dialect {
            Dialect::Console => {
                markdown.push_str("| 重要度 | ルール | トークン/問題 | メッセージ | 提案 |\n");
                markdown.push_str("|--------|--------|--------------|------------|------|\n");
                for issue in members {
                    markdown.push_str(&console_row(issue));
                }
            }
            Dialect::Heading => {
                markdown.push_str("| 重要度 | 行 | ルール | メッセージ |\n");
                markdown.push_str("|--------|----|--------|------------|\n");
                for issue in members {
                    markdown.push_str(&heading_row(issue));
                }
            }
        }

        markdown.push('\n');
    }

    PrComment {
        has_errors: summary.any(),
        markdown,
        errors: issues,
        summary,
    }
}

fn console_row(issue: &Issue) -> String {
    let rule = issue.rule.as_deref().unwrap_or("-");
    let token = issue
        .token
        .as_deref()
        .map(|t| format!("`{}`", t))
        .unwrap_or_else(|| "-".to_string());
    let message = if issue.message.is_empty() {
        "エラーが検出されました"
    } else {
        issue.message.as_str()
    };
    let message = escape_cell(&truncate(message));
    let suggestion = issue
        .suggestion
        .as_deref()
        .map(escape_cell)
        .unwrap_or_else(|| "-".to_string());

    format!(
        "| {} {} | {} | {} | {} | {} |\n",
        issue.severity.icon(),
        issue.severity.label_ja(),
        rule,
        token,
        message,
        suggestion
    )
}

fn heading_row(issue: &Issue) -> String {
    let location = match (issue.line, issue.column) {
        (Some(line), Some(column)) => format!("{}:{}", line, column),
        (Some(line), None) => line.to_string(),
        _ => "-".to_string(),
    };
    let rule = issue.rule.as_deref().unwrap_or("-");
    let message = escape_cell(&truncate(&issue.message));

    format!(
        "| {} {} | {} | {} | {} |\n",
        issue.severity.icon(),
        issue.severity.label_ja(),
        location,
        rule,
        message
    )
}

/// Truncate long messages so table rows stay scannable.
fn truncate(message: &str) -> String {
    if message.chars().count() > MAX_MESSAGE_LEN {
        let head: String = message.chars().take(MAX_MESSAGE_LEN - 3).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

/// Escape characters that would break the markdown table.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
