//! Target pattern matching for gardenctl.
//!
//! Free-form target strings (shell arguments, copied URLs, aliases) are
//! decomposed into a garden/project/namespace/shoot tuple by evaluating an
//! ordered list of regular expressions. The first pattern that matches wins
//! and its named capture groups populate a [`PatternMatch`].

mod key;
mod result;

pub use key::PatternKey;
pub use result::{MatchError, PatternMatch};

use regex_lite::Regex;

/// Match `value` against `patterns` in order.
///
/// Patterns are compiled lazily as they are reached. A pattern that fails to
/// compile aborts the whole operation with [`MatchError::Compile`], even if a
/// later pattern would have matched. Patterns after the first match are
/// neither compiled nor evaluated.
///
/// Patterns use `regex-lite` syntax, which has no Unicode classes: `\p{L}`
/// and similar fail with [`MatchError::Compile`] even though RE2 accepts them.
pub fn match_pattern<S: AsRef<str>>(patterns: &[S], value: &str) -> Result<PatternMatch, MatchError> {
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let regex = Regex::new(pattern).map_err(|source| MatchError::Compile {
            pattern: pattern.to_string(),
            source,
        })?;

        if let Some(found) = extract(&regex, value) {
            return Ok(found);
        }
    }

    Err(MatchError::NoMatch {
        value: value.to_string(),
    })
}

/// Run a compiled pattern and copy recognized named groups into a match.
fn extract(regex: &Regex, value: &str) -> Option<PatternMatch> {
    let captures = regex.captures(value)?;
    let mut found = PatternMatch::default();

    for name in regex.capture_names().flatten() {
        let Some(key) = PatternKey::from_group_name(name) else {
            continue;
        };
        // Groups that did not participate, or matched nothing, stay unset.
        if let Some(m) = captures.name(name).filter(|m| !m.as_str().is_empty()) {
            found.set(key, m.as_str());
        }
    }

    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERNS: &[&str] = &[
        "^(?P<garden>[a-z]+)$",
        "^(?P<garden>[a-z]+)/(?P<project>[a-z]+)$",
    ];

    #[test]
    fn test_first_pattern_wins() {
        let found = match_pattern(PATTERNS, "foo").unwrap();
        assert_eq!(found.garden.as_deref(), Some("foo"));
        assert_eq!(found.project, None);
        assert_eq!(found.namespace, None);
        assert_eq!(found.shoot, None);
    }

    #[test]
    fn test_falls_through_to_later_pattern() {
        let found = match_pattern(PATTERNS, "foo/bar").unwrap();
        assert_eq!(found.garden.as_deref(), Some("foo"));
        assert_eq!(found.project.as_deref(), Some("bar"));
    }

    #[test]
    fn test_empty_pattern_list_never_matches() {
        let patterns: &[&str] = &[];
        let result = match_pattern(patterns, "anything");
        assert!(matches!(result, Err(MatchError::NoMatch { .. })));
    }

    #[test]
    fn test_unmatched_value() {
        let result = match_pattern(PATTERNS, "Foo/Bar/Baz");
        match result {
            Err(MatchError::NoMatch { value }) => assert_eq!(value, "Foo/Bar/Baz"),
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pattern_aborts() {
        let patterns = ["^(?P<garden>[a-z]+", "^(?P<garden>.*)$"];
        match match_pattern(&patterns, "foo") {
            Err(MatchError::Compile { pattern, .. }) => assert_eq!(pattern, "^(?P<garden>[a-z]+"),
            other => panic!("expected Compile error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pattern_after_match_is_not_reached() {
        let patterns = ["^(?P<garden>.*)$", "(unclosed"];
        let found = match_pattern(&patterns, "prod").unwrap();
        assert_eq!(found.garden.as_deref(), Some("prod"));
    }

    #[test]
    fn test_all_recognized_groups() {
        let patterns = [
            r"^(?P<garden>[^/]+)/(?P<project>[^/]+)/(?P<namespace>[^/]+)/(?P<shoot>[^/]+)$",
        ];
        let found = match_pattern(&patterns, "sap/dev/garden-dev/cluster-1").unwrap();
        assert_eq!(found.garden.as_deref(), Some("sap"));
        assert_eq!(found.project.as_deref(), Some("dev"));
        assert_eq!(found.namespace.as_deref(), Some("garden-dev"));
        assert_eq!(found.shoot.as_deref(), Some("cluster-1"));
    }

    #[test]
    fn test_unknown_and_unnamed_groups_ignored() {
        let patterns = [r"^(?P<region>[a-z]+)-([0-9]+)-(?P<shoot>[a-z]+)$"];
        let found = match_pattern(&patterns, "eu-01-web").unwrap();
        assert_eq!(found.shoot.as_deref(), Some("web"));
        assert_eq!(found.garden, None);
        assert_eq!(found.project, None);
    }

    #[test]
    fn test_optional_group_not_participating() {
        let patterns = [r"^(?P<shoot>[a-z]+)(?:\.(?P<project>[a-z]+))?$"];
        let found = match_pattern(&patterns, "web").unwrap();
        assert_eq!(found.shoot.as_deref(), Some("web"));
        assert_eq!(found.project, None);

        let found = match_pattern(&patterns, "web.dev").unwrap();
        assert_eq!(found.project.as_deref(), Some("dev"));
    }

    #[test]
    fn test_unanchored_pattern_matches_substring() {
        let patterns = [r"shoot--(?P<project>[a-z0-9]+)--(?P<shoot>[a-z0-9-]+)"];
        let found = match_pattern(&patterns, "https://dashboard/shoot--core--api-1").unwrap();
        assert_eq!(found.project.as_deref(), Some("core"));
        assert_eq!(found.shoot.as_deref(), Some("api-1"));
    }

    #[test]
    fn test_unicode_class_not_supported() {
        let patterns = [r"^(?P<garden>\p{L}+)$"];
        let result = match_pattern(&patterns, "garden");
        assert!(matches!(result, Err(MatchError::Compile { .. })));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let patterns = vec!["^(?P<garden>.+)$".to_string()];
        let found = match_pattern(&patterns, "landscape").unwrap();
        assert_eq!(found.garden.as_deref(), Some("landscape"));
    }
}
