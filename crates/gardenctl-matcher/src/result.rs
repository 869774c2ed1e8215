//! Match result and error types.

use serde::Serialize;

use crate::PatternKey;

/// Target values extracted from a string by the first matching pattern.
///
/// A field is only set when the pattern declares the corresponding named
/// group and that group captured non-empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garden: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Can be used to find the related project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoot: Option<String>,
}

impl PatternMatch {
    /// Get the value captured for `key`.
    pub fn get(&self, key: PatternKey) -> Option<&str> {
        match key {
            PatternKey::Garden => self.garden.as_deref(),
            PatternKey::Project => self.project.as_deref(),
            PatternKey::Namespace => self.namespace.as_deref(),
            PatternKey::Shoot => self.shoot.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, key: PatternKey, value: &str) {
        let slot = match key {
            PatternKey::Garden => &mut self.garden,
            PatternKey::Project => &mut self.project,
            PatternKey::Namespace => &mut self.namespace,
            PatternKey::Shoot => &mut self.shoot,
        };
        *slot = Some(value.to_string());
    }

    /// True when no field was captured.
    pub fn is_empty(&self) -> bool {
        PatternKey::ALL.iter().all(|key| self.get(*key).is_none())
    }
}

/// Errors produced while matching target patterns.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("failed to compile configured regular expression {pattern:?}: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("the provided value {value:?} does not match any pattern")]
    NoMatch { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let m = PatternMatch::default();
        assert!(m.is_empty());
        assert_eq!(m.get(PatternKey::Shoot), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut m = PatternMatch::default();
        m.set(PatternKey::Namespace, "garden-core");
        assert_eq!(m.get(PatternKey::Namespace), Some("garden-core"));
        assert_eq!(m.namespace.as_deref(), Some("garden-core"));
        assert!(!m.is_empty());
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let mut m = PatternMatch::default();
        m.set(PatternKey::Garden, "prod");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"garden":"prod"}"#);
    }
}
