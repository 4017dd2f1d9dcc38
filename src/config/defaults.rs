/// Report files looked for inside the reports directory.
pub const JSON_REPORT_FILE: &str = "lint-report.json";
pub const MD_REPORT_FILE: &str = "lint-report.md";

/// Output files written back into the reports directory.
pub const COMMENT_FILE: &str = "pr-comment.md";
pub const SUMMARY_FILE: &str = "errors.json";

pub const DEFAULT_REPORTS_DIR: &str = "./reports";

/// Issues without a file attribution are reported against the token dictionary.
pub const DEFAULT_FILE: &str = "tokens.json";

/// Table cells longer than this are truncated with an ellipsis.
pub const MAX_MESSAGE_LEN: usize = 100;

/// Rule identifiers the linter is known to emit.
pub const KNOWN_RULES: [&str; 6] = [
    "naming-convention",
    "raw-values",
    "duplicates",
    "ai-naming-consistency",
    "ai-spacing-consistency",
    "ai-design-complexity",
];

/// Extensions accepted when a report line names a source file.
pub const SOURCE_EXT_PATTERN: &str = r"\.(tsx?|css|jsx?|json)$";
