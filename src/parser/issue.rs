use crate::config::DEFAULT_FILE;
use serde::{Deserialize, Deserializer, Serialize};

/// Severity of a lint finding, normalized from whatever label the report
/// used (`Error`, `[WARN]`, `エラー`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Normalize a free-text severity label. A missing or empty label counts
    /// as an error; an unrecognized label counts as info.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.trim().is_empty() || label.contains("error") || label.contains("エラー") {
            Severity::Error
        } else if label.contains("warn") || label.contains("警告") {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
        }
    }

    pub fn label_ja(&self) -> &'static str {
        match self {
            Severity::Error => "エラー",
            Severity::Warning => "警告",
            Severity::Info => "情報",
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(Severity::from_label(label.as_deref().unwrap_or("")))
    }
}

/// One detected lint finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default = "default_file", deserialize_with = "file_or_default")]
    pub file: String,

    #[serde(default)]
    pub line: Option<u32>,

    #[serde(default)]
    pub column: Option<u32>,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub message: String,

    #[serde(default)]
    pub rule: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Identity used when merging overlapping extraction passes.
    pub fn merge_key(&self) -> (Option<&str>, Option<&str>, &str) {
        (self.rule.as_deref(), self.token.as_deref(), self.file.as_str())
    }
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

fn file_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()).unwrap_or_else(default_file))
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_normalization() {
        assert_eq!(Severity::from_label("Error"), Severity::Error);
        assert_eq!(Severity::from_label("[ERROR]"), Severity::Error);
        assert_eq!(Severity::from_label("エラー"), Severity::Error);
        assert_eq!(Severity::from_label("warn"), Severity::Warning);
        assert_eq!(Severity::from_label("警告"), Severity::Warning);
        assert_eq!(Severity::from_label("info"), Severity::Info);
        // Missing labels count as errors, unknown ones as info
        assert_eq!(Severity::from_label(""), Severity::Error);
        assert_eq!(Severity::from_label("fatal"), Severity::Info);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let issue: Issue = serde_json::from_str(r#"{"message": "bad color"}"#).unwrap();
        assert_eq!(issue.file, "tokens.json");
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.message, "bad color");
        assert!(issue.line.is_none());
        assert!(issue.rule.is_none());
    }

    #[test]
    fn test_deserialize_null_fields() {
        let issue: Issue = serde_json::from_str(
            r#"{"file": null, "line": null, "severity": null, "message": null}"#,
        )
        .unwrap();
        assert_eq!(issue.file, "tokens.json");
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.message, "");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
