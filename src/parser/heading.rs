use super::{rule, Issue, Severity};
use crate::config::{DEFAULT_FILE, SOURCE_EXT_PATTERN};
use regex::Regex;
use std::collections::HashSet;

/// Parse the older report layout: `##` file headings with plain
/// `Error:` / `Warning:` / `エラー:` bullet lines, plus a secondary pass over
/// inline `file.ext:line:col` references in backticks or link brackets.
pub fn parse(raw: &str) -> Vec<Issue> {
    scan(raw).unwrap_or_default()
}

/// Dedup key for the two passes. Records that never got a line number fall
/// back to their message text so distinct findings are not collapsed.
fn dedup_key(issue: &Issue) -> (String, Option<u32>, Option<String>) {
    match issue.line {
        Some(line) => (issue.file.clone(), Some(line), None),
        None => (issue.file.clone(), None, Some(issue.message.clone())),
    }
}

fn scan(raw: &str) -> Option<Vec<Issue>> {
    let heading_re = Regex::new(r"^##+\s+`?([^`]+?)`?\s*$").ok()?;
    let ext_re = Regex::new(SOURCE_EXT_PATTERN).ok()?;
    let bullet_re =
        Regex::new(r"^[-*]?\s*((?i:Error|Warning|Info)|エラー|警告|情報)\s*[:：]\s*(.+)$").ok()?;
    let location_re =
        Regex::new(r"([\w./-]+\.(?:tsx?|jsx?|css|json)):(\d+)(?::(\d+))?").ok()?;
    let ref_re =
        Regex::new(r"[`\[]([\w./-]+\.(?:tsx?|jsx?|css|json)):(\d+)(?::(\d+))?[`\]]").ok()?;

    let mut issues: Vec<Issue> = Vec::new();
    let mut seen: HashSet<(String, Option<u32>, Option<String>)> = HashSet::new();
    let mut current_file = DEFAULT_FILE.to_string();

    for line in raw.lines() {
        if let Some(caps) = heading_re.captures(line) {
            let name = caps[1].trim().to_string();
            if name != "Unknown" && ext_re.is_match(&name) {
                current_file = name;
            }
            continue;
        }

        let Some(caps) = bullet_re.captures(line) else {
            continue;
        };
        let severity = Severity::from_label(&caps[1]);
        let message = caps[2].trim().to_string();

        // An inline file:line reference overrides the section heading
        let (file, line_no, column) = match location_re.captures(&message) {
            Some(loc) => (
                loc[1].to_string(),
                loc[2].parse().ok(),
                loc.get(3).and_then(|c| c.as_str().parse().ok()),
            ),
            None => (current_file.clone(), None, None),
        };

        let issue = Issue {
            file,
            line: line_no,
            column,
            severity,
            rule: rule::extract_rule_name(&message),
            message,
            token: None,
            suggestion: None,
        };
        if seen.insert(dedup_key(&issue)) {
            issues.push(issue);
        }
    }

    // Secondary pass: any backtick or link-bracket reference with a line
    // number counts as a finding even without a severity bullet
    for line in raw.lines() {
        for caps in ref_re.captures_iter(line) {
            let issue = Issue {
                file: caps[1].to_string(),
                line: caps[2].parse().ok(),
                column: caps.get(3).and_then(|c| c.as_str().parse().ok()),
                severity: Severity::from_label(line),
                message: line.trim_start_matches(['-', '*', ' ']).to_string(),
                rule: rule::extract_rule_name(line),
                token: None,
                suggestion: None,
            };
            if seen.insert(dedup_key(&issue)) {
                issues.push(issue);
            }
        }
    }

    Some(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_sections_and_bullets() {
        let md = r#"
## src/components/Button.tsx

- Error: raw-values ハードコードされた色があります
- Warning: 命名が一貫していません

## `src/theme.css`

- エラー: 重複した値
"#;
        let issues = parse(md);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].file, "src/components/Button.tsx");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].rule.as_deref(), Some("raw-values"));
        assert_eq!(issues[1].severity, Severity::Warning);
        assert_eq!(issues[2].file, "src/theme.css");
        assert_eq!(issues[2].severity, Severity::Error);
    }

    #[test]
    fn test_inline_location_overrides_heading() {
        let md = "## src/a.tsx\n- Error: bad value in `src/b.tsx:12:5`\n";
        let issues = parse(md);
        assert_eq!(issues[0].file, "src/b.tsx");
        assert_eq!(issues[0].line, Some(12));
        assert_eq!(issues[0].column, Some(5));
    }

    #[test]
    fn test_secondary_reference_pass() {
        let md = "See [src/theme.css:3] for the duplicate value\n";
        let issues = parse(md);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].file, "src/theme.css");
        assert_eq!(issues[0].line, Some(3));
        assert_eq!(issues[0].column, None);
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_dedup_by_file_and_line() {
        // The bullet and the bare reference point at the same finding
        let md = "## src/a.tsx\n- Error: bad color `src/a.tsx:7`\nAlso noted at `src/a.tsx:7`\n";
        let issues = parse(md);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_bullets_without_lines_not_collapsed() {
        let md = "## src/a.tsx\n- Error: first problem\n- Error: second problem\n";
        assert_eq!(parse(md).len(), 2);
    }

    #[test]
    fn test_non_source_heading_ignored() {
        let md = "## Summary\n- Error: something broke\n";
        let issues = parse(md);
        assert_eq!(issues[0].file, "tokens.json");
    }
}
