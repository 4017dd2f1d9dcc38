use crate::config::KNOWN_RULES;
use regex::Regex;

/// Pull a rule identifier out of arbitrary report text.
///
/// Tries an explicit `rule:` / `ルール:` label first, then the allow-list of
/// rule names the linter is known to emit. First match wins.
pub fn extract_rule_name(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let labeled = Regex::new(r"(?i)(?:rule|ルール)[:\s]+([a-z-]+)").ok()?;
    if let Some(caps) = labeled.captures(text) {
        return Some(caps[1].to_string());
    }

    let known = Regex::new(&format!("(?i)({})", KNOWN_RULES.join("|"))).ok()?;
    known.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_rule() {
        assert_eq!(
            extract_rule_name("violated rule: raw-values in theme"),
            Some("raw-values".to_string())
        );
        assert_eq!(
            extract_rule_name("ルール: naming-convention"),
            Some("naming-convention".to_string())
        );
    }

    #[test]
    fn test_known_rule_anywhere() {
        assert_eq!(
            extract_rule_name("the ai-spacing-consistency check flagged this"),
            Some("ai-spacing-consistency".to_string())
        );
    }

    #[test]
    fn test_label_wins_over_allow_list() {
        assert_eq!(
            extract_rule_name("rule: duplicates (not raw-values)"),
            Some("duplicates".to_string())
        );
    }

    #[test]
    fn test_no_rule() {
        assert_eq!(extract_rule_name("nothing to see here"), None);
        assert_eq!(extract_rule_name(""), None);
    }
}
