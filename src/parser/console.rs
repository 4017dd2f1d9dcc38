use super::{Issue, Severity};
use crate::config::{DEFAULT_FILE, SOURCE_EXT_PATTERN};
use regex::Regex;
use std::collections::HashSet;

/// Parse the linter's own console/markdown output.
///
/// Two passes cooperate: structured `####` file sections with bold rule
/// markers, then `[ERROR]`-tagged console blocks. Console records are only
/// appended when no structured record already covers the same
/// (rule, token, file).
pub fn parse(raw: &str) -> Vec<Issue> {
    let mut issues = structured_pass(raw).unwrap_or_default();
    let tagged = tagged_pass(&strip_ansi(raw)).unwrap_or_default();

    for issue in tagged {
        let exists = issues.iter().any(|e| e.merge_key() == issue.merge_key());
        if !exists {
            issues.push(issue);
        }
    }

    issues
}

fn strip_ansi(text: &str) -> String {
    match Regex::new(r"\x1b\[[0-9;]*m") {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Accumulated fields of one open rule block.
#[derive(Default)]
struct RuleBlock {
    rule: String,
    severity: Severity,
    message: Option<String>,
    token: Option<String>,
}

/// Scanner state. A record is only emitted on the suggestion bullet.
enum ScanState {
    Idle,
    InRule(RuleBlock),
}

fn structured_pass(raw: &str) -> Option<Vec<Issue>> {
    let file_re = Regex::new(r"^####\s+[📄\s]*(.+?)\s*$").ok()?;
    let ext_re = Regex::new(SOURCE_EXT_PATTERN).ok()?;
    let marker_re = Regex::new(r"^(❌|⚠️|ℹ️)\s+\*\*([^*]+)\*\*").ok()?;
    let problem_re = Regex::new(r"^-\s+\*\*問題\*\*:\s*(.+)$").ok()?;
    let suggestion_re = Regex::new(r"^-\s+\*\*提案\*\*:\s*(.+)$").ok()?;
    let backtick_re = Regex::new(r"`([^`]+)`").ok()?;

    let mut issues = Vec::new();
    let mut current_file = DEFAULT_FILE.to_string();
    let mut state = ScanState::Idle;

    for line in raw.lines() {
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = file_re.captures(line) {
            let name = caps[1].trim().to_string();
            if name != "Unknown" && ext_re.is_match(&name) {
                current_file = name;
            }
            continue;
        }

        if let Some(caps) = marker_re.captures(line) {
            let severity = match &caps[1] {
                "❌" => Severity::Error,
                "⚠️" => Severity::Warning,
                _ => Severity::Info,
            };
            state = ScanState::InRule(RuleBlock {
                rule: caps[2].trim().to_string(),
                severity,
                message: None,
                token: None,
            });
            continue;
        }

        if let Some(caps) = suggestion_re.captures(line) {
            if let ScanState::InRule(block) = std::mem::replace(&mut state, ScanState::Idle) {
                issues.push(finish_block(block, &current_file, caps[1].trim(), &backtick_re));
            }
            continue;
        }

        if let ScanState::InRule(block) = &mut state {
            if let Some(caps) = problem_re.captures(line) {
                block.message = Some(caps[1].trim().to_string());
                continue;
            }

            if block.token.is_none() {
                if let Some(caps) = backtick_re.captures(line) {
                    block.token = Some(caps[1].to_string());
                }
            }
        }
    }

    Some(issues)
}

fn finish_block(block: RuleBlock, file: &str, suggestion: &str, backtick_re: &Regex) -> Issue {
    // A token quoted in the problem message wins over one picked up earlier
    let message_token = block
        .message
        .as_deref()
        .and_then(|m| backtick_re.captures(m))
        .map(|caps| caps[1].to_string());

    Issue {
        file: file.to_string(),
        line: None,
        column: None,
        severity: block.severity,
        message: block.message.clone().unwrap_or_else(|| block.rule.clone()),
        rule: Some(block.rule),
        token: message_token.or(block.token),
        suggestion: Some(suggestion.to_string()),
    }
}

/// Split ANSI-stripped text into blocks starting at a bracketed severity tag
/// and running to the next tag or end of text.
fn tagged_pass(text: &str) -> Option<Vec<Issue>> {
    let tag_re = Regex::new(r"\[(ERROR|WARN|INFO)\]").ok()?;
    let head_re = Regex::new(r"\[(?:ERROR|WARN|INFO)\]\s+([^:\n]+):\s*([^\n]*)").ok()?;
    let token_res = [
        Regex::new(r#"Token name\s+"([^"]+)""#).ok()?,
        Regex::new(r"トークン[:\s]+([^\n\s]+)").ok()?,
    ];
    let suggestion_re = Regex::new(r"提案[:\s]+([^\n]+)").ok()?;

    let starts: Vec<usize> = tag_re.find_iter(text).map(|m| m.start()).collect();
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let block = &text[start..end];

        let severity = match tag_re.captures(block).map(|caps| caps[1].to_string()) {
            Some(tag) if tag == "ERROR" => Severity::Error,
            Some(tag) if tag == "WARN" => Severity::Warning,
            _ => Severity::Info,
        };

        // Rule is the text before the first colon; a block without one is noise
        let Some(head) = head_re.captures(block) else {
            continue;
        };
        let rule = head[1].trim().to_string();
        let message = Some(head[2].trim().to_string()).filter(|m| !m.is_empty());

        let token = token_res
            .iter()
            .find_map(|re| re.captures(block).map(|caps| caps[1].trim().to_string()));

        let suggestion = suggestion_re
            .captures(block)
            .map(|caps| caps[1].trim().to_string());

        if token.is_none() && message.is_none() {
            continue;
        }

        let key = format!(
            "{}:{}",
            rule,
            token.as_deref().or(message.as_deref()).unwrap_or_default()
        );
        if !seen.insert(key) {
            continue;
        }

        let message = message.unwrap_or_else(|| match &token {
            Some(token) => format!("Token name \"{}\" does not match pattern", token),
            None => "エラーが検出されました".to_string(),
        });

        issues.push(Issue {
            file: DEFAULT_FILE.to_string(),
            line: None,
            column: None,
            severity,
            message,
            rule: Some(rule),
            token,
            suggestion,
        });
    }

    Some(issues)
}
